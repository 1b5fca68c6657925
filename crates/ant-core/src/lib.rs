//! `ant-core` — foundational types for the `antsort` warehouse simulation.
//!
//! This crate is a dependency of every other `ant-*` crate.  It intentionally
//! has no `ant-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `RobotId`, `ConveyorId`, `StorageId`, `MailId`    |
//! | [`point`]   | `Point`, `Direction`                              |
//! | [`mail`]    | `MailType`                                        |
//! | [`time`]    | `Tick`, `SimConfig`                               |
//! | [`rng`]     | `SimRng` (single shared deterministic source)     |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod ids;
pub mod mail;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ConveyorId, MailId, RobotId, StorageId};
pub use mail::MailType;
pub use point::{Direction, Point};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
