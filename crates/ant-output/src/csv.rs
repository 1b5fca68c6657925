//! CSV output backend.
//!
//! Creates `actions.csv` in the configured output directory.  Points are
//! serialized as `(x, y)` strings in single columns, matching the format the
//! downstream analysis tooling already parses.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ant_sim::ActionRecord;

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the action log to a single CSV file.
pub struct CsvWriter {
    actions: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `actions.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut actions = Writer::from_path(dir.join("actions.csv"))?;
        actions.write_record(["time", "id_action", "id_robot", "point", "point_target", "desc"])?;

        Ok(Self {
            actions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_action(&mut self, record: &ActionRecord) -> OutputResult<()> {
        self.actions.write_record(&[
            record.tick.0.to_string(),
            record.kind.code().to_string(),
            record.robot.0.to_string(),
            record.source.to_string(),
            record.target.to_string(),
            record.description.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.actions.flush()?;
        Ok(())
    }
}
