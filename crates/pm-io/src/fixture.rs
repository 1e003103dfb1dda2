//! CSV fixture files for agents and targets.
//!
//! # CSV format
//!
//! Agents, one row per driver:
//!
//! ```csv
//! id,x,y
//! 0,12,845
//! 1,-3.5,40
//! ```
//!
//! Targets, one row per package:
//!
//! ```csv
//! id,x,y,priority
//! 0,500,500,high
//! 1,-20.25,7,low
//! ```
//!
//! `id` is a non-negative integer, `x`/`y` are finite decimals, `priority`
//! is `low`, `normal`, or `high` (case-insensitive).  Whitespace around
//! fields is ignored.
//!
//! # Validation
//!
//! Every field is read as text and parsed explicitly so a failure names the
//! 1-based data row and the column.  The first bad row fails the whole load;
//! no partial list is ever returned.

use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use pm_core::{Agent, AgentId, PmError, Point, Priority, Target, TargetId};

use crate::FixtureResult;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AgentRecord {
    id: Option<String>,
    x:  Option<String>,
    y:  Option<String>,
}

#[derive(Deserialize)]
struct TargetRecord {
    id:       Option<String>,
    x:        Option<String>,
    y:        Option<String>,
    priority: Option<String>,
}

// ── Loaders ───────────────────────────────────────────────────────────────────

/// Load agents from a CSV file.
pub fn load_agents_csv(path: &Path) -> FixtureResult<Vec<Agent>> {
    let file = std::fs::File::open(path)?;
    load_agents_reader(file)
}

/// Like [`load_agents_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_agents_reader<R: Read>(reader: R) -> FixtureResult<Vec<Agent>> {
    let mut csv_reader = reader_builder().from_reader(reader);
    let mut agents = Vec::new();

    for (i, result) in csv_reader.deserialize::<AgentRecord>().enumerate() {
        let rec = result?;
        let row = i + 1;
        agents.push(Agent {
            id:  AgentId(parse_id(row, "id", rec.id)?),
            pos: Point::new(parse_coord(row, "x", rec.x)?, parse_coord(row, "y", rec.y)?),
        });
    }

    debug!(rows = agents.len(), "loaded agent fixture");
    Ok(agents)
}

/// Load targets from a CSV file.
pub fn load_targets_csv(path: &Path) -> FixtureResult<Vec<Target>> {
    let file = std::fs::File::open(path)?;
    load_targets_reader(file)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
pub fn load_targets_reader<R: Read>(reader: R) -> FixtureResult<Vec<Target>> {
    let mut csv_reader = reader_builder().from_reader(reader);
    let mut targets = Vec::new();

    for (i, result) in csv_reader.deserialize::<TargetRecord>().enumerate() {
        let rec = result?;
        let row = i + 1;
        targets.push(Target {
            id:       TargetId(parse_id(row, "id", rec.id)?),
            pos:      Point::new(parse_coord(row, "x", rec.x)?, parse_coord(row, "y", rec.y)?),
            priority: parse_priority(row, rec.priority)?,
        });
    }

    debug!(rows = targets.len(), "loaded target fixture");
    Ok(targets)
}

// ── Writers ───────────────────────────────────────────────────────────────────

/// Write agents in the fixture format, so generated scenarios can be
/// replayed elsewhere.
pub fn write_agents_csv(path: &Path, agents: &[Agent]) -> FixtureResult<()> {
    let file = std::fs::File::create(path)?;
    write_agents_writer(file, agents)
}

pub fn write_agents_writer<W: Write>(writer: W, agents: &[Agent]) -> FixtureResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["id", "x", "y"])?;
    for a in agents {
        w.write_record(&[a.id.0.to_string(), a.pos.x.to_string(), a.pos.y.to_string()])?;
    }
    w.flush()?;
    Ok(())
}

/// Write targets in the fixture format.
pub fn write_targets_csv(path: &Path, targets: &[Target]) -> FixtureResult<()> {
    let file = std::fs::File::create(path)?;
    write_targets_writer(file, targets)
}

pub fn write_targets_writer<W: Write>(writer: W, targets: &[Target]) -> FixtureResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["id", "x", "y", "priority"])?;
    for t in targets {
        w.write_record(&[
            t.id.0.to_string(),
            t.pos.x.to_string(),
            t.pos.y.to_string(),
            t.priority.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Short rows are accepted by the reader so that a missing trailing value
/// surfaces as a named missing field instead of a generic length error.
fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.trim(csv::Trim::All).flexible(true);
    b
}

fn required(row: usize, field: &str, value: Option<String>) -> Result<String, PmError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(PmError::invalid(location(row, field), "missing value")),
    }
}

fn parse_id(row: usize, field: &str, value: Option<String>) -> Result<u64, PmError> {
    let s = required(row, field, value)?;
    s.parse::<u64>().map_err(|_| {
        PmError::invalid(location(row, field), format!("{s:?} is not a non-negative integer"))
    })
}

fn parse_coord(row: usize, field: &str, value: Option<String>) -> Result<f64, PmError> {
    let s = required(row, field, value)?;
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(PmError::invalid(location(row, field), format!("{s:?} is not finite"))),
        Err(_) => Err(PmError::invalid(location(row, field), format!("{s:?} is not a number"))),
    }
}

fn parse_priority(row: usize, value: Option<String>) -> Result<Priority, PmError> {
    let s = required(row, "priority", value)?;
    s.parse::<Priority>().map_err(|e| match e {
        PmError::InputValidation { reason, .. } => {
            PmError::invalid(location(row, "priority"), reason)
        }
        other => other,
    })
}

fn location(row: usize, field: &str) -> String {
    format!("row {row}, field `{field}`")
}
