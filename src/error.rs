//! Error types shared across the crate.
//!
//! Missing table data is never an error (lookups fall back to defaults), so
//! the variants here only cover malformed inputs, unusable configuration and
//! failures of the equity collaborator.

use thiserror::Error;

/// Errors produced while parsing cards, hands, ranges or positions from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A rank character outside `23456789TJQKA`.
    #[error("invalid rank character: {0}")]
    InvalidRank(char),

    /// A suit character outside `cdhs` / `♣♦♥♠`.
    #[error("invalid suit character: {0}")]
    InvalidSuit(char),

    /// Input ended before a card was complete.
    #[error("incomplete card in {0:?}")]
    IncompleteCard(String),

    /// Wrong number of cards for the thing being parsed.
    #[error("expected {expected} cards, got {actual}")]
    CardCount {
        /// Cards the target type needs.
        expected: usize,
        /// Cards found in the input.
        actual: usize,
    },

    /// A board with more than five cards.
    #[error("board has {0} cards (at most 5)")]
    BoardTooLong(usize),

    /// A hand code that is not `XX`, `XYs` or `XYo`.
    #[error("invalid hand format: {0}")]
    InvalidHand(String),

    /// A hand code suffix other than `s` / `o`.
    #[error("invalid suffix: {0} (expected 's' or 'o')")]
    InvalidSuffix(char),

    /// Range notation that does not describe a contiguous span.
    #[error("invalid range notation: {0}")]
    InvalidRange(String),

    /// A seat name that is not one of the six 6-max positions.
    #[error("unknown position: {0}")]
    UnknownPosition(String),
}

/// Errors raised by an equity source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// The deck cannot supply enough cards to finish the deal.
    #[error("not enough cards left in the deck: need {needed}, have {available}")]
    NotEnoughCards {
        /// Cards the deal requires.
        needed: usize,
        /// Cards remaining after removing dead cards.
        available: usize,
    },

    /// More than five board cards.
    #[error("board has {0} cards (at most 5)")]
    InvalidBoard(usize),

    /// A simulation configured with zero samples.
    #[error("equity sample count must be positive")]
    NoSamples,

    /// Failure reported by an external equity backend.
    #[error("equity backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors loading or validating configuration and range-table files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON did not match the expected schema.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Equity simulation configured with zero samples.
    #[error("equity sample count must be positive")]
    NoSamples,

    /// A hand-strength entry outside the 1-10 scale.
    #[error("invalid strength {strength} for {hand} (must be within 1-10)")]
    InvalidStrength {
        /// Hand code of the offending entry.
        hand: String,
        /// The rejected score.
        strength: f64,
    },

    /// A range or hand entry that failed to parse.
    #[error("invalid range entry: {0}")]
    Range(#[from] ParseError),
}

/// Errors returned by the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    /// The board is not a preflop, flop, turn or river board.
    #[error("board must have 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoard(usize),

    /// The equity source failed; no recommendation is produced.
    #[error("equity source failed: {0}")]
    Equity(#[from] EquityError),
}
