//! Equity calculation.
//!
//! The decision engine only sees equity through [`EquitySource`]: a
//! probability in `[0, 1]` that the hero's hand wins (ties count half) by
//! showdown, either against one known hand or against an unknown opponent.
//!
//! [`SimulatedEquity`] is the shipped implementation. It enumerates every
//! remaining runout when that is cheap enough and falls back to seeded Monte
//! Carlo sampling otherwise, so results are reproducible.

pub mod simulated;

use serde::{Deserialize, Serialize};

use crate::cards::{Board, HoleCards};
use crate::error::EquityError;
pub use simulated::SimulatedEquity;

/// Source of showdown equities for the decision engine.
pub trait EquitySource: Send + Sync {
    /// Equity of `hero` against a single known `villain` hand on `board`.
    fn heads_up(&self, hero: &HoleCards, villain: &HoleCards, board: &Board) -> Result<f64, EquityError>;

    /// Equity of `hero` against an unknown opponent holding on `board`.
    fn vs_range(&self, hero: &HoleCards, board: &Board) -> Result<f64, EquityError>;
}

impl<E: EquitySource + ?Sized> EquitySource for &E {
    fn heads_up(&self, hero: &HoleCards, villain: &HoleCards, board: &Board) -> Result<f64, EquityError> {
        (**self).heads_up(hero, villain, board)
    }

    fn vs_range(&self, hero: &HoleCards, board: &Board) -> Result<f64, EquityError> {
        (**self).vs_range(hero, board)
    }
}

impl<E: EquitySource + ?Sized> EquitySource for Box<E> {
    fn heads_up(&self, hero: &HoleCards, villain: &HoleCards, board: &Board) -> Result<f64, EquityError> {
        (**self).heads_up(hero, villain, board)
    }

    fn vs_range(&self, hero: &HoleCards, board: &Board) -> Result<f64, EquityError> {
        (**self).vs_range(hero, board)
    }
}

/// Configuration for [`SimulatedEquity`].
///
/// # Example
/// ```
/// use holdem_advisor::equity::EquityConfig;
///
/// let config = EquityConfig::default().with_samples(5_000).with_seed(7);
/// assert_eq!(config.samples, 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Monte Carlo trials when exhaustive enumeration is too expensive.
    pub samples: usize,

    /// Base seed; every sampling chunk derives its own seed from this.
    pub seed: u64,

    /// Largest number of showdowns enumerated exactly.
    ///
    /// River and turn spots, and any heads-up flop, stay under the default.
    pub exhaustive_limit: u64,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            samples: 20_000,
            seed: 0x5EED,
            exhaustive_limit: 50_000,
        }
    }
}

impl EquityConfig {
    /// Configuration for quick, coarse estimates (tests, previews).
    pub fn fast() -> Self {
        Self {
            samples: 2_000,
            exhaustive_limit: 5_000,
            ..Default::default()
        }
    }

    /// Builder method: set the sample count.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Builder method: set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method: set the enumeration limit.
    pub fn with_exhaustive_limit(mut self, limit: u64) -> Self {
        self.exhaustive_limit = limit;
        self
    }
}
