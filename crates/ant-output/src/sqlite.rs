//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! one `actions` table mirroring the CSV columns.

use std::path::Path;

use rusqlite::Connection;

use ant_sim::ActionRecord;

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the action log to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS actions (
                 time      INTEGER NOT NULL,
                 id_action INTEGER NOT NULL,
                 id_robot  INTEGER NOT NULL,
                 source_x  INTEGER NOT NULL,
                 source_y  INTEGER NOT NULL,
                 target_x  INTEGER NOT NULL,
                 target_y  INTEGER NOT NULL,
                 desc      TEXT    NOT NULL
             );",
        )?;

        Ok(Self {
            conn,
            finished: false,
        })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_action(&mut self, record: &ActionRecord) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO actions \
             (time, id_action, id_robot, source_x, source_y, target_x, target_y, desc) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        stmt.execute(rusqlite::params![
            record.tick.0,
            record.kind.code(),
            record.robot.0,
            record.source.x,
            record.source.y,
            record.target.x,
            record.target.y,
            record.description,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
