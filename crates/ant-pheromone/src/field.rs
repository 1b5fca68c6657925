//! The pheromone field — a grid of [`PheromoneTile`]s, 1:1 with the
//! occupancy grid.
//!
//! The field owns its tiles by value in a flat row-major `Vec`; all mutation
//! goes through field methods, so a detached tile copy can never shadow the
//! stored one.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;

use ant_core::{Direction, Point, SimRng};
use ant_grid::Grid;

use crate::{PheromoneError, PheromoneResult, PheromoneTile};

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneField {
    width: u32,
    height: u32,
    tiles: Vec<PheromoneTile>,
}

impl PheromoneField {
    /// Seed a field from the static grid topology.
    ///
    /// For every structurally open cell: each of the four move directions
    /// whose neighbor is also structurally open gets strength 1.0, and
    /// `Holding` always gets 1.0.  Cells that are not structurally open
    /// (barricades, fixtures) keep all-absent strengths — no valid moves are
    /// ever computed for them.
    ///
    /// Seeding is a pure function of the grid: seeding twice from the same
    /// grid yields identical fields.
    pub fn seed(grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut tiles = vec![PheromoneTile::absent(); width as usize * height as usize];

        for point in grid.points() {
            if !grid.is_structurally_open(point) {
                continue;
            }
            let tile = &mut tiles[point.y as usize * width as usize + point.x as usize];
            for direction in Direction::MOVES {
                if grid.is_structurally_open(point + direction.delta()) {
                    tile.set(direction, 1.0);
                }
            }
            tile.set(Direction::Holding, 1.0);
        }

        Self {
            width,
            height,
            tiles,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[inline]
    fn idx(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    /// The tile at `point`.
    pub fn tile(&self, point: Point) -> PheromoneResult<&PheromoneTile> {
        if !self.in_bounds(point) {
            return Err(PheromoneError::OutOfBounds(point));
        }
        Ok(&self.tiles[self.idx(point)])
    }

    /// Multiply every present strength of every tile by `coefficient` —
    /// whole-field trail evaporation, triggered by task completion.
    pub fn decay(&mut self, coefficient: f64) {
        for tile in &mut self.tiles {
            tile.decay(coefficient);
        }
    }

    /// Add `amount` to `direction`'s strength at `point`.
    ///
    /// Reinforcing an absent direction is a logic defect (the traveled path
    /// only contains directions that were actually moved into, which are by
    /// construction present) and is surfaced as an error.
    pub fn reinforce(
        &mut self,
        point: Point,
        direction: Direction,
        amount: f64,
    ) -> PheromoneResult<()> {
        if !self.in_bounds(point) {
            return Err(PheromoneError::OutOfBounds(point));
        }
        let i = self.idx(point);
        self.tiles[i]
            .reinforce(direction, amount)
            .ok_or(PheromoneError::AbsentDirection { point, direction })
    }

    /// Sample a direction at `point` with probability proportional to its
    /// present, non-excluded strength.
    ///
    /// `excluded` lists directions already tried and rejected this tick;
    /// `Holding` cannot be excluded (it is only ruled out by absence or zero
    /// weight).  An empty or all-zero candidate list is an error — a
    /// well-formed field always leaves `Holding` eligible, so the caller
    /// must treat this as fatal rather than retry.
    pub fn choose_move(
        &self,
        point: Point,
        excluded: &[Direction],
        rng: &mut SimRng,
    ) -> PheromoneResult<Direction> {
        let tile = self.tile(point)?;
        let candidates = tile.candidates(excluded);
        if candidates.is_empty() {
            return Err(PheromoneError::NoEligibleDirection(point));
        }
        let weights: Vec<f64> = candidates.iter().map(|(_, w)| *w).collect();
        let dist = WeightedIndex::new(&weights)
            .map_err(|_| PheromoneError::NoEligibleDirection(point))?;
        Ok(candidates[dist.sample(rng.inner())].0)
    }

    /// Sum of all present strengths across the field (diagnostics and tests).
    pub fn total_strength(&self) -> f64 {
        self.tiles
            .iter()
            .flat_map(|t| Direction::ALL.into_iter().filter_map(|d| t.strength(d)))
            .sum()
    }
}
