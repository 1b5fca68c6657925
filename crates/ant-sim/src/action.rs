//! Action records — the sole observable output of a run besides final counts.

use std::fmt;

use ant_core::{Point, RobotId, Tick};

/// What a robot did this tick.
///
/// The integer codes are a stable contract for downstream analysis tooling;
/// do not renumber.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ActionKind {
    /// Handed a package to a storage.
    Give,
    /// Took a freshly minted package from a conveyor.
    Take,
    /// Moved one tile (or held in place).
    Move,
}

impl ActionKind {
    /// Wire encoding: give=0, take=1, move=2.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            ActionKind::Give => 0,
            ActionKind::Take => 1,
            ActionKind::Move => 2,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Give => "give",
            ActionKind::Take => "take",
            ActionKind::Move => "move",
        };
        f.write_str(name)
    }
}

/// One row of the append-only action log.
///
/// `source` is the robot's position when the action happened; `target` is
/// the tile acted on — the storage for a give, the conveyor for a take, the
/// destination tile for a move (equal to `source` when holding in place).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActionRecord {
    pub tick: Tick,
    pub kind: ActionKind,
    pub robot: RobotId,
    pub source: Point,
    pub target: Point,
    pub description: String,
}
