//! Error types for ant-pheromone.

use thiserror::Error;

use ant_core::{Direction, Point};

#[derive(Debug, Error)]
pub enum PheromoneError {
    #[error("point {0} is outside the pheromone field")]
    OutOfBounds(Point),

    /// Reinforcing a direction that was never seeded.  The traveled path
    /// only ever reinforces directions it actually moved into, so this is a
    /// logic defect, not a recoverable condition.
    #[error("direction {direction} at {point} has no trail to reinforce")]
    AbsentDirection { point: Point, direction: Direction },

    /// Every direction at the tile was excluded, absent, or zero-weighted.
    /// A well-formed field always leaves `Holding` eligible, so this too is
    /// a logic defect and must be surfaced, never retried.
    #[error("no eligible direction at {0}")]
    NoEligibleDirection(Point),
}

pub type PheromoneResult<T> = Result<T, PheromoneError>;
