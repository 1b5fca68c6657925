//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ant_core::Tick;
use ant_sim::{ActionRecord, SimObserver};

use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams every action record into any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `controller.run()` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run finishes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_action(&mut self, record: &ActionRecord) {
        let result = self.writer.write_action(record);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _delivered: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
