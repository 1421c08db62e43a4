//! Enumeration / Monte Carlo equity.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::cmp::Ordering;

use super::{EquityConfig, EquitySource};
use crate::cards::{Board, Card, Deck, HandEvaluator, HoleCards};
use crate::error::EquityError;

/// Trials per sampling chunk; each chunk gets its own seeded RNG.
const CHUNK_SIZE: usize = 1_000;

/// Equity by exhaustive enumeration, falling back to seeded sampling.
///
/// Opponents without known cards hold a uniformly random pair of live cards.
#[derive(Debug, Clone, Default)]
pub struct SimulatedEquity {
    config: EquityConfig,
    evaluator: HandEvaluator,
}

impl SimulatedEquity {
    /// Create an equity source with the given configuration.
    pub fn new(config: EquityConfig) -> Self {
        Self { config, evaluator: HandEvaluator::new() }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// 1 for a hero win, 0.5 for a split, 0 for a loss on a full board.
    fn showdown(&self, hero: &HoleCards, villain: &HoleCards, board: &[Card]) -> f64 {
        match self.evaluator.compare(hero, villain, board) {
            Ordering::Greater => 1.0,
            Ordering::Equal => 0.5,
            Ordering::Less => 0.0,
        }
    }

    /// Average `trial` over `config.samples` runs, split into parallel chunks.
    ///
    /// Chunk seeds depend only on the base seed and chunk index, so the result
    /// does not depend on thread scheduling.
    fn sample<F>(&self, trial: F) -> Result<f64, EquityError>
    where
        F: Fn(&mut StdRng) -> f64 + Sync,
    {
        let samples = self.config.samples;
        if samples == 0 {
            return Err(EquityError::NoSamples);
        }

        let seed = self.config.seed;
        let chunks = samples.div_ceil(CHUNK_SIZE);
        let totals: Vec<f64> = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let chunk_seed = seed.wrapping_add((chunk as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
                let mut rng = StdRng::seed_from_u64(chunk_seed);
                let len = CHUNK_SIZE.min(samples - chunk * CHUNK_SIZE);
                (0..len).map(|_| trial(&mut rng)).sum::<f64>()
            })
            .collect();

        Ok(totals.iter().sum::<f64>() / samples as f64)
    }
}

impl EquitySource for SimulatedEquity {
    fn heads_up(&self, hero: &HoleCards, villain: &HoleCards, board: &Board) -> Result<f64, EquityError> {
        let known = board.cards();
        check_board(known)?;

        let mut dead = Vec::with_capacity(9);
        dead.extend(hero.cards());
        dead.extend(villain.cards());
        dead.extend_from_slice(known);
        let deck = Deck::without(&dead);

        let missing = 5 - known.len();
        ensure_cards(missing, deck.remaining())?;

        let mut full = [Card::from_id(0); 5];
        full[..known.len()].copy_from_slice(known);

        let runouts = binomial(deck.remaining(), missing);
        if runouts <= self.config.exhaustive_limit {
            let mut total = 0.0;
            for_each_combination(deck.remaining_cards(), missing, |extra| {
                full[known.len()..].copy_from_slice(extra);
                total += self.showdown(hero, villain, &full);
            });
            log::trace!("heads-up {} vs {} on [{}]: enumerated {} runouts", hero, villain, board, runouts);
            return Ok(total / runouts as f64);
        }

        log::trace!("heads-up {} vs {} on [{}]: sampling", hero, villain, board);
        self.sample(|rng| {
            let mut deck = deck.clone();
            deck.shuffle(rng);
            let mut full = full;
            full[known.len()..].copy_from_slice(&deck.remaining_cards()[..missing]);
            self.showdown(hero, villain, &full)
        })
    }

    fn vs_range(&self, hero: &HoleCards, board: &Board) -> Result<f64, EquityError> {
        let known = board.cards();
        check_board(known)?;

        let mut dead = Vec::with_capacity(7);
        dead.extend(hero.cards());
        dead.extend_from_slice(known);
        let deck = Deck::without(&dead);

        let missing = 5 - known.len();
        ensure_cards(missing + 2, deck.remaining())?;

        let mut full = [Card::from_id(0); 5];
        full[..known.len()].copy_from_slice(known);

        let runouts = binomial(deck.remaining(), missing);
        let scenarios = runouts.saturating_mul(binomial(deck.remaining() - missing, 2));
        if scenarios <= self.config.exhaustive_limit {
            let mut total = 0.0;
            for_each_combination(deck.remaining_cards(), missing, |extra| {
                full[known.len()..].copy_from_slice(extra);
                let live: Vec<Card> = deck
                    .remaining_cards()
                    .iter()
                    .copied()
                    .filter(|c| !extra.contains(c))
                    .collect();
                for_each_combination(&live, 2, |opp| {
                    let villain = HoleCards::new(opp[0], opp[1]);
                    total += self.showdown(hero, &villain, &full);
                });
            });
            log::trace!("{} vs range on [{}]: enumerated {} showdowns", hero, board, scenarios);
            return Ok(total / scenarios as f64);
        }

        log::trace!("{} vs range on [{}]: sampling", hero, board);
        self.sample(|rng| {
            let mut deck = deck.clone();
            deck.shuffle(rng);
            let dealt = deck.remaining_cards();
            let villain = HoleCards::new(dealt[0], dealt[1]);
            let mut full = full;
            full[known.len()..].copy_from_slice(&dealt[2..2 + missing]);
            self.showdown(hero, &villain, &full)
        })
    }
}

fn check_board(board: &[Card]) -> Result<(), EquityError> {
    if board.len() > 5 {
        return Err(EquityError::InvalidBoard(board.len()));
    }
    Ok(())
}

fn ensure_cards(needed: usize, available: usize) -> Result<(), EquityError> {
    if available < needed {
        return Err(EquityError::NotEnoughCards { needed, available });
    }
    Ok(())
}

/// n choose k.
fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}

/// Call `f` with every k-card subset of `pool`, in lexicographic index order.
fn for_each_combination<F: FnMut(&[Card])>(pool: &[Card], k: usize, mut f: F) {
    let n = pool.len();
    if k > n {
        return;
    }

    let mut idx: Vec<usize> = (0..k).collect();
    let mut picked: Vec<Card> = idx.iter().map(|&i| pool[i]).collect();

    loop {
        f(&picked);

        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return;
        };
        idx[i] += 1;
        for j in (i + 1)..k {
            idx[j] = idx[j - 1] + 1;
        }
        for j in i..k {
            picked[j] = pool[idx[j]];
        }
    }
}
