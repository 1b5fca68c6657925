//! The occupancy grid and its builder.

use std::fmt;

use ant_core::Point;

use crate::{GridError, GridResult, TileKind};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Fixed-size occupancy grid, row-major, lower-left origin.
///
/// All mutation goes through [`place`](Grid::place) / [`clear`](Grid::clear);
/// there is no way to hand out a `&mut TileKind`, so the grid can never
/// disagree with itself about what a cell holds.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
}

impl Grid {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[inline]
    fn idx(&self, point: Point) -> usize {
        debug_assert!(self.in_bounds(point));
        point.y as usize * self.width as usize + point.x as usize
    }

    /// The kind at `point`, or `Unknown` when out of bounds.
    #[inline]
    pub fn kind(&self, point: Point) -> TileKind {
        if self.in_bounds(point) {
            self.tiles[self.idx(point)]
        } else {
            TileKind::Unknown
        }
    }

    /// `true` iff `point` is in bounds and the tile is `Empty`.
    ///
    /// This is the predicate for actual robot movement: dynamic occupants
    /// block just like fixtures do.
    #[inline]
    pub fn is_passable(&self, point: Point) -> bool {
        self.in_bounds(point) && self.tiles[self.idx(point)] == TileKind::Empty
    }

    /// `true` iff `point` is in bounds and the tile is `Empty` or `Robot`.
    ///
    /// This is the predicate for seeding the static pheromone topology:
    /// robots are transient, so a robot-occupied tile still counts as open.
    #[inline]
    pub fn is_structurally_open(&self, point: Point) -> bool {
        self.in_bounds(point)
            && matches!(
                self.tiles[self.idx(point)],
                TileKind::Empty | TileKind::Robot
            )
    }

    /// Set the kind at `point`.
    ///
    /// Fails unless the tile is currently passable — nothing may overwrite a
    /// non-empty tile; callers must [`clear`](Grid::clear) first.
    pub fn place(&mut self, point: Point, kind: TileKind) -> GridResult<()> {
        if !self.in_bounds(point) {
            return Err(GridError::OutOfBounds(point));
        }
        let occupied = self.tiles[self.idx(point)];
        if occupied != TileKind::Empty {
            return Err(GridError::TileOccupied {
                point,
                kind,
                occupied,
            });
        }
        let i = self.idx(point);
        self.tiles[i] = kind;
        Ok(())
    }

    /// Reset the tile at `point` to `Empty`, unconditionally.
    ///
    /// Out-of-bounds points are ignored.
    pub fn clear(&mut self, point: Point) {
        if self.in_bounds(point) {
            let i = self.idx(point);
            self.tiles[i] = TileKind::Empty;
        }
    }

    /// Iterator over all in-bounds points, row by row from the origin.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    /// Count tiles of a given kind (robots on the grid, barricade density…).
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }
}

impl fmt::Display for Grid {
    /// ASCII dump, top row first (so it reads the way the warehouse looks).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                write!(f, "{}", self.kind(Point::new(x, y)))?;
                if x + 1 < self.width as i32 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Grid`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts barricades in any order and never fails on duplicate
/// barricade placement (rasterized wall segments overlap at corners).
///
/// # Example
///
/// ```
/// use ant_core::Point;
/// use ant_grid::{GridBuilder, TileKind};
///
/// let grid = GridBuilder::new(4, 3)
///     .barricade(Point::new(1, 1))
///     .build();
/// assert_eq!(grid.kind(Point::new(1, 1)), TileKind::Barricade);
/// assert!(grid.is_passable(Point::new(0, 0)));
/// ```
pub struct GridBuilder {
    width: u32,
    height: u32,
    barricades: Vec<Point>,
}

impl GridBuilder {
    /// An open `width × height` arena with no barricades.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            barricades: Vec::new(),
        }
    }

    /// Mark a single cell as a barricade.  Out-of-bounds points are dropped
    /// at `build` time.
    pub fn barricade(mut self, point: Point) -> Self {
        self.barricades.push(point);
        self
    }

    /// Mark every cell of an iterator as barricades.
    pub fn barricades(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.barricades.extend(points);
        self
    }

    /// Rasterize an axis-aligned wall outline; see [`crate::rasterize`].
    pub fn from_walls(
        outline: &[Point],
        extras: &[crate::rasterize::Obstacle],
    ) -> GridResult<Grid> {
        crate::rasterize::rasterize(outline, extras)
    }

    pub fn build(self) -> Grid {
        let mut grid = Grid {
            width: self.width,
            height: self.height,
            tiles: vec![TileKind::Empty; self.width as usize * self.height as usize],
        };
        for p in self.barricades {
            if grid.in_bounds(p) {
                let i = grid.idx(p);
                grid.tiles[i] = TileKind::Barricade;
            }
        }
        grid
    }
}
