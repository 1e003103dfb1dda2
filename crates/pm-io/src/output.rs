//! Match-result output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use pm_core::MatchResult;

use crate::FixtureResult;

/// Sink for a run's match list.
pub trait MatchWriter {
    /// Append a batch of matches.  May be called repeatedly.
    fn write_matches(&mut self, rows: &[MatchResult]) -> FixtureResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> FixtureResult<()>;
}

/// Writes matches as `agent_id,target_id,distance` CSV rows.
pub struct CsvMatchWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvMatchWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> FixtureResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvMatchWriter<W> {
    pub fn from_writer(writer: W) -> FixtureResult<Self> {
        let mut inner = Writer::from_writer(writer);
        inner.write_record(["agent_id", "target_id", "distance"])?;
        Ok(Self { inner, finished: false })
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> FixtureResult<W> {
        self.inner.flush()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> MatchWriter for CsvMatchWriter<W> {
    fn write_matches(&mut self, rows: &[MatchResult]) -> FixtureResult<()> {
        for row in rows {
            self.inner.write_record(&[
                row.agent_id.0.to_string(),
                row.target_id.0.to_string(),
                row.distance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> FixtureResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
