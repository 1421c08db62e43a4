//! Poker hand evaluation.
//!
//! Ranks 5-7 card hands. Each 5-card hand is scored from rank counts and a
//! rank bitmask; 6 and 7 card hands take the best 5-card subset.

use std::cmp::Ordering;
use std::fmt;

use super::card::{Card, HoleCards};

/// Made-hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No pair.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Trips or a set.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five of one suit.
    Flush,
    /// Trips plus a pair.
    FullHouse,
    /// Quads.
    FourOfAKind,
    /// Straight in one suit.
    StraightFlush,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Lower-case name, e.g. `"two pair"`.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::OnePair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "trips",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "quads",
            HandCategory::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Totally ordered strength of a 5-card hand; bigger is better.
///
/// Packed as the category in bits 20.. and up to five 4-bit tie-break ranks
/// below it, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(u32);

impl HandRank {
    const CATEGORY_SHIFT: u32 = 20;

    fn new(category: HandCategory, tiebreak: &[u8]) -> Self {
        let packed = tiebreak
            .iter()
            .take(5)
            .zip((0..5u32).rev())
            .fold(0u32, |acc, (&rank, slot)| acc | ((rank as u32) << (slot * 4)));
        Self(((category as u32) << Self::CATEGORY_SHIFT) | packed)
    }

    /// Packed value; comparing values compares hands.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Made-hand category.
    pub fn category(&self) -> HandCategory {
        let index = (self.0 >> Self::CATEGORY_SHIFT) as usize;
        HandCategory::ALL.get(index).copied().unwrap_or(HandCategory::HighCard)
    }
}

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a 5-card hand.
    pub fn evaluate_5(&self, cards: &[Card; 5]) -> HandRank {
        let mut rank_counts = [0u8; 13];
        let mut rank_bits = 0u16;
        let first_suit = cards[0].suit();
        let mut is_flush = true;

        for card in cards {
            rank_counts[card.rank() as usize] += 1;
            rank_bits |= 1 << card.rank();
            is_flush &= card.suit() == first_suit;
        }

        let straight_high = find_straight(rank_bits);
        if let (Some(high), true) = (straight_high, is_flush) {
            return HandRank::new(HandCategory::StraightFlush, &[high]);
        }

        // (count, rank), biggest groups first, then by rank.
        let mut groups = [(0u8, 0u8); 5];
        let mut n = 0;
        for rank in (0..13u8).rev() {
            let count = rank_counts[rank as usize];
            if count > 0 && n < groups.len() {
                groups[n] = (count, rank);
                n += 1;
            }
        }
        let groups = &mut groups[..n];
        groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

        let mut kickers = [0u8; 5];
        for (slot, &(_, rank)) in kickers.iter_mut().zip(groups.iter()) {
            *slot = rank;
        }
        let kickers = &kickers[..n];

        let top = groups[0].0;
        let second = groups.get(1).map_or(0, |g| g.0);

        let category = match (top, second) {
            (t, _) if t >= 4 => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            _ if is_flush => HandCategory::Flush,
            _ if straight_high.is_some() => HandCategory::Straight,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        };

        match (category, straight_high) {
            (HandCategory::Straight, Some(high)) => HandRank::new(category, &[high]),
            _ => HandRank::new(category, kickers),
        }
    }

    /// Evaluate the best 5-card hand out of 5, 6 or 7 cards.
    pub fn evaluate(&self, cards: &[Card]) -> HandRank {
        debug_assert!((5..=7).contains(&cards.len()), "evaluate needs 5-7 cards");
        let n = cards.len();
        let mut best = HandRank(0);

        for a in 0..n {
            for b in (a + 1)..n {
                for c in (b + 1)..n {
                    for d in (c + 1)..n {
                        for e in (d + 1)..n {
                            let rank = self.evaluate_5(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                            best = best.max(rank);
                        }
                    }
                }
            }
        }

        best
    }

    /// Evaluate hole cards together with a complete 3-5 card board.
    pub fn evaluate_hand(&self, hole_cards: &HoleCards, board: &[Card]) -> HandRank {
        let mut cards = [hole_cards.high(); 7];
        cards[1] = hole_cards.low();
        let len = 2 + board.len().min(5);
        cards[2..len].copy_from_slice(&board[..len - 2]);
        self.evaluate(&cards[..len])
    }

    /// Compare two holdings on the same board.
    pub fn compare(&self, hole1: &HoleCards, hole2: &HoleCards, board: &[Card]) -> Ordering {
        self.evaluate_hand(hole1, board)
            .cmp(&self.evaluate_hand(hole2, board))
    }
}

/// Find the highest straight from a rank bitmask.
/// Returns the high card of the straight, or None if no straight.
fn find_straight(rank_bits: u16) -> Option<u8> {
    const WHEEL: u16 = 0b1_0000_0000_1111;

    for high in (4..13u8).rev() {
        let mask = 0b11111u16 << (high - 4);
        if rank_bits & mask == mask {
            return Some(high);
        }
    }

    // A-2-3-4-5 plays as a five-high straight.
    if rank_bits & WHEEL == WHEEL {
        return Some(3);
    }

    None
}
