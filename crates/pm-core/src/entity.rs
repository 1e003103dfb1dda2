//! Immutable value records: agents, targets, and match results.
//!
//! None of these types carry behaviour beyond construction and validation.
//! The matcher borrows agents and targets; it never copies or mutates them.

use std::str::FromStr;

use crate::{AgentId, PmError, PmResult, Point, TargetId};

// ── Priority ──────────────────────────────────────────────────────────────────

/// Delivery priority of a target.
///
/// Pass-through metadata for downstream consumers.  Matching never reads it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Lowercase label, used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low    => "low",
            Priority::Normal => "normal",
            Priority::High   => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low"    => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high"   => Ok(Priority::High),
            other => Err(PmError::invalid(
                "priority",
                format!("{other:?}: expected \"low\", \"normal\", or \"high\""),
            )),
        }
    }
}

// ── Agent / Target ────────────────────────────────────────────────────────────

/// A driver looking for nearby packages.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:  AgentId,
    pub pos: Point,
}

impl Agent {
    #[inline]
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self { id: AgentId(id), pos: Point::new(x, y) }
    }
}

/// A package waiting to be picked up.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id:       TargetId,
    pub pos:      Point,
    pub priority: Priority,
}

impl Target {
    #[inline]
    pub fn new(id: u64, x: f64, y: f64, priority: Priority) -> Self {
        Self { id: TargetId(id), pos: Point::new(x, y), priority }
    }
}

// ── MatchResult ───────────────────────────────────────────────────────────────

/// One agent/target pair closer than the configured threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub agent_id:  AgentId,
    pub target_id: TargetId,
    /// Exact Euclidean distance; always `< max_distance`.
    pub distance:  f64,
}

impl MatchResult {
    /// The `(agent, target)` identity of this match, ignoring distance.
    #[inline]
    pub fn pair(&self) -> (AgentId, TargetId) {
        (self.agent_id, self.target_id)
    }
}

// ── Batch validation ──────────────────────────────────────────────────────────

/// Reject the batch if any agent has a non-finite coordinate.
pub fn validate_agents(agents: &[Agent]) -> PmResult<()> {
    for agent in agents {
        check_point(&agent.id.to_string(), agent.pos)?;
    }
    Ok(())
}

/// Reject the batch if any target has a non-finite coordinate.
pub fn validate_targets(targets: &[Target]) -> PmResult<()> {
    for target in targets {
        check_point(&target.id.to_string(), target.pos)?;
    }
    Ok(())
}

fn check_point(owner: &str, pos: Point) -> PmResult<()> {
    if !pos.x.is_finite() {
        return Err(PmError::invalid(format!("{owner}.x"), format!("{} is not finite", pos.x)));
    }
    if !pos.y.is_finite() {
        return Err(PmError::invalid(format!("{owner}.y"), format!("{} is not finite", pos.y)));
    }
    Ok(())
}
