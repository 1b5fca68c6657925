//! Tile kinds.

use std::fmt;

/// What occupies a grid cell.  Exactly one kind per cell at a time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Nothing here — the only kind robots may move into.
    #[default]
    Empty,
    /// A wall segment or other permanent obstacle.
    Barricade,
    /// A robot currently stands here.
    Robot,
    /// A package conveyor fixture.
    Conveyor,
    /// A package storage fixture.
    Storage,
    /// Out of bounds / unresolvable — never stored in the grid itself.
    Unknown,
}

impl TileKind {
    /// `true` for kinds that never move for the duration of a run.
    #[inline]
    pub const fn is_static(self) -> bool {
        matches!(
            self,
            TileKind::Barricade | TileKind::Conveyor | TileKind::Storage
        )
    }
}

impl fmt::Display for TileKind {
    /// Single-letter code, handy for ASCII grid dumps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            TileKind::Empty => 'e',
            TileKind::Barricade => 'b',
            TileKind::Robot => 'r',
            TileKind::Conveyor => 'c',
            TileKind::Storage => 's',
            TileKind::Unknown => 'u',
        };
        write!(f, "{c}")
    }
}
