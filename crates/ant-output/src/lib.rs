//! `ant-output` — action-log writers for the antsort warehouse simulation.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created |
//! |-----------|-------------|---------------|
//! | *(none)*  | CSV         | `actions.csv` |
//! | `sqlite`  | SQLite      | `output.db`   |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `ant_sim::SimObserver`.
//!
//! The CSV column order (`time,id_action,id_robot,point,point_target,desc`)
//! and the action-kind codes (give=0, take=1, move=2) are a stable contract
//! for downstream analysis tooling.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ant_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! controller.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
