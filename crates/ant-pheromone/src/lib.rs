//! `ant-pheromone` — per-tile directional trail strengths and the operators
//! that drive them.
//!
//! # Model
//!
//! Every grid cell carries up to five scalar trail strengths, one per
//! [`Direction`](ant_core::Direction) including `Holding` (stay in place).
//! A strength is *absent* (`None`) when that direction was never valid for
//! the cell — absent directions are never selectable.  A present strength of
//! exactly `0.0` is a different thing: still selectable in principle, just
//! with zero weight.  Conflating the two was a known defect in earlier
//! models of this system.
//!
//! # Dynamics
//!
//! - **Seeding** ([`PheromoneField::seed`]) initializes every structurally
//!   open cell with strength 1.0 toward each structurally open neighbor and
//!   toward `Holding`.  Seeding is a pure function of the static grid.
//! - **Decay** ([`PheromoneField::decay`]) multiplies every present strength
//!   in the whole field by a coefficient in `(0, 1)` — trail evaporation,
//!   triggered once per completed pickup or delivery, not every tick.
//! - **Reinforcement** ([`PheromoneField::reinforce`]) adds credit to one
//!   direction at one tile — deposition along a successful path.
//! - **Choice** ([`PheromoneField::choose_move`]) samples a direction with
//!   probability proportional to its present, non-excluded strength.

pub mod error;
pub mod field;
pub mod tile;


pub use error::{PheromoneError, PheromoneResult};
pub use field::PheromoneField;
pub use tile::PheromoneTile;
