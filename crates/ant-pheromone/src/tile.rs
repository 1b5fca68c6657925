//! A single cell's directional trail strengths.

use ant_core::Direction;

/// Trail strengths for one cell, indexed by [`Direction::index`].
///
/// `None` = absent (direction never valid here, never selectable).
/// `Some(s)` = present with weight `s ≥ 0.0` — zero is present-but-zero,
/// not absent.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneTile {
    strengths: [Option<f64>; 5],
}

impl PheromoneTile {
    /// A tile with every direction absent (barricades, unreachable cells).
    pub const fn absent() -> Self {
        Self {
            strengths: [None; 5],
        }
    }

    #[inline]
    pub fn strength(&self, direction: Direction) -> Option<f64> {
        self.strengths[direction.index()]
    }

    #[inline]
    pub fn is_present(&self, direction: Direction) -> bool {
        self.strengths[direction.index()].is_some()
    }

    /// `true` if no direction is present at all.
    pub fn is_all_absent(&self) -> bool {
        self.strengths.iter().all(Option::is_none)
    }

    /// Initialize a direction's trail (seeding only).
    #[inline]
    pub(crate) fn set(&mut self, direction: Direction, strength: f64) {
        self.strengths[direction.index()] = Some(strength);
    }

    /// Multiply every present strength by `coefficient`.
    ///
    /// Present-but-zero strengths stay present: evaporation never turns a
    /// valid direction into an invalid one.
    pub fn decay(&mut self, coefficient: f64) {
        for slot in &mut self.strengths {
            if let Some(s) = slot {
                *s *= coefficient;
            }
        }
    }

    /// Add `amount` to a present direction's strength.
    ///
    /// Returns `None` if the direction is absent so the field can attach the
    /// tile position to the error.
    #[must_use]
    pub(crate) fn reinforce(&mut self, direction: Direction, amount: f64) -> Option<()> {
        let slot = self.strengths[direction.index()].as_mut()?;
        *slot += amount;
        Some(())
    }

    /// Present, non-excluded `(direction, weight)` candidates.
    ///
    /// `Holding` ignores the exclusion list: it is only ever ruled out by
    /// being absent or zero-weighted, exactly like the routing step expects.
    pub fn candidates(&self, excluded: &[Direction]) -> Vec<(Direction, f64)> {
        Direction::ALL
            .into_iter()
            .filter(|d| d.is_holding() || !excluded.contains(d))
            .filter_map(|d| self.strengths[d.index()].map(|s| (d, s)))
            .collect()
    }
}
