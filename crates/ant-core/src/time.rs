//! Simulation time model and top-level run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! decision round: every robot acts exactly once per tick, in id order.
//! There is no wall-clock mapping — downstream analysis only ever compares
//! tick numbers.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: even at a million ticks per second a
/// u64 lasts ~585,000 years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Advance by one tick in place.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a YAML/TOML file by the application crate and passed
/// to the controller builder in `ant-sim`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// The run ends once this many packages have been delivered.
    pub target_deliveries: u64,

    /// Multiplicative trail-evaporation factor applied to a whole pheromone
    /// field on every completed pickup or delivery.  Must be in `(0, 1)`.
    pub decay_coefficient: f64,
}

impl SimConfig {
    /// The evaporation factor the simulation ships with by default.
    pub const DEFAULT_DECAY: f64 = 0.7;

    pub fn new(seed: u64, target_deliveries: u64) -> Self {
        Self {
            seed,
            target_deliveries,
            decay_coefficient: Self::DEFAULT_DECAY,
        }
    }

    /// Override the decay coefficient.
    pub fn with_decay(mut self, coefficient: f64) -> Self {
        self.decay_coefficient = coefficient;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.decay_coefficient > 0.0 && self.decay_coefficient < 1.0) {
            return Err(CoreError::Config(format!(
                "decay coefficient must be in (0, 1), got {}",
                self.decay_coefficient
            )));
        }
        Ok(())
    }
}
