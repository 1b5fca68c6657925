//! `ant-sim` — tick loop controller for the antsort warehouse simulation.
//!
//! # Per-robot state machine
//!
//! ```text
//! for each tick, for each robot in ascending RobotId order:
//!   ① Deliver — carrying && a storage accepting the package's type is one
//!               orthogonal step away → hand over, decay that type's field,
//!               back-propagate 1/L credit along the traveled path.
//!   ② Take    — empty-handed && a conveyor is pickable (adjacent, or robot
//!               stands on its out-point) → mint a package, decay the shared
//!               exploration field, back-propagate into it.
//!   ③ Move    — sample a direction from the relevant pheromone field,
//!               excluding directions already rejected this tick, until the
//!               target tile is passable (Holding always accepted); then
//!               clear / move / re-mark the grid and record the step.
//! ```
//!
//! Robots are processed sequentially; a later robot sees every grid mutation
//! an earlier robot made this tick.  That ordering is part of the model's
//! tie-breaking semantics, not an implementation detail.
//!
//! The run ends when the configured delivery target is reached.  There is no
//! stall detection and no tick cap — a blocked-in robot simply keeps drawing
//! `Holding`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ant_sim::{ControllerBuilder, NoopObserver};
//!
//! let mut controller = ControllerBuilder::new(config, grid)
//!     .robot_at(Point::new(0, 0))
//!     .conveyor(conveyor)
//!     .storage(storage)
//!     .build()?;
//! controller.run(&mut NoopObserver)?;
//! ```

pub mod action;
pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

pub use action::{ActionKind, ActionRecord};
pub use builder::ControllerBuilder;
pub use controller::Controller;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
