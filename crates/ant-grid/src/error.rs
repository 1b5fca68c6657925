//! Error types for ant-grid.

use thiserror::Error;

use ant_core::Point;

use crate::TileKind;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("point {0} is out of bounds")]
    OutOfBounds(Point),

    #[error("cannot place {kind:?} at {point}: tile is {occupied:?}")]
    TileOccupied {
        point: Point,
        kind: TileKind,
        occupied: TileKind,
    },

    #[error("wall polyline needs at least 2 points, got {0}")]
    DegenerateOutline(usize),

    #[error("wall segment {start}–{end} is not axis-aligned")]
    SkewedWall { start: Point, end: Point },
}

pub type GridResult<T> = Result<T, GridError>;
