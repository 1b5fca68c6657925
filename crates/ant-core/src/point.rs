//! Integer grid coordinates and the five-way movement direction.
//!
//! The grid is origin-normalized: the lower-left corner of the warehouse is
//! `(0, 0)` and coordinates grow up and to the right.  `Point` is signed so
//! that off-grid neighbors of border cells (`(0, 0) + Direction::Left` is
//! `(-1, 0)`) are representable; bounds checks live in `ant-grid`.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// ── Point ─────────────────────────────────────────────────────────────────────

/// An integer `(x, y)` grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors of `self`, in `Direction::MOVES` order.
    pub fn neighbors(self) -> [Point; 4] {
        [
            self + Direction::Up.delta(),
            self + Direction::Down.delta(),
            self + Direction::Left.delta(),
            self + Direction::Right.delta(),
        ]
    }

    /// `true` if `other` is exactly one orthogonal step from `self`.
    pub fn is_adjacent(self, other: Point) -> bool {
        let d = other - self;
        d.x.abs() + d.y.abs() == 1
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal moves, or `Holding` (stay in place).
///
/// `Holding` is a first-class choice: the pheromone field carries a weight
/// for it and the routing step may sample it like any other direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Holding,
}

impl Direction {
    /// All five directions, `Holding` last.  `index()` follows this order.
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Holding,
    ];

    /// The four actual moves (everything except `Holding`).
    pub const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit step this direction represents; `Holding` is `(0, 0)`.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
            Direction::Holding => Point::new(0, 0),
        }
    }

    /// Position of this direction in [`Direction::ALL`], for array indexing.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
            Direction::Holding => 4,
        }
    }

    #[inline]
    pub const fn is_holding(self) -> bool {
        matches!(self, Direction::Holding)
    }

    /// The direction pointing the opposite way; `Holding` is its own opposite.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Holding => Direction::Holding,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Holding => "holding",
        };
        f.write_str(name)
    }
}
