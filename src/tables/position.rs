//! Seats at a 6-max table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Position labels for a 6-max game, in preflop action order.
///
/// Text and JSON share one parser, so every alias accepted by `FromStr` is
/// also accepted in batch input and range-table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    /// Under the gun, first to act.
    UTG,
    /// Middle position (hijack).
    MP,
    /// Cutoff.
    CO,
    /// Button.
    BTN,
    /// Small blind.
    SB,
    /// Big blind.
    BB,
}

impl Position {
    /// All positions in preflop action order.
    pub fn all() -> &'static [Position] {
        &[
            Position::UTG,
            Position::MP,
            Position::CO,
            Position::BTN,
            Position::SB,
            Position::BB,
        ]
    }

    /// Short label used in tables and output.
    pub fn label(&self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::MP => "MP",
            Position::CO => "CO",
            Position::BTN => "BTN",
            Position::SB => "SB",
            Position::BB => "BB",
        }
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Accepts the labels and common aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UTG" | "EP" | "LJ" | "EARLY" => Ok(Position::UTG),
            "MP" | "MP1" | "MP2" | "HJ" | "UTG+1" | "UTG1" | "MIDDLE" => Ok(Position::MP),
            "CO" | "CUTOFF" => Ok(Position::CO),
            "BTN" | "BU" | "BUTTON" => Ok(Position::BTN),
            "SB" | "SMALL_BLIND" | "SMALLBLIND" => Ok(Position::SB),
            "BB" | "BIG_BLIND" | "BIGBLIND" => Ok(Position::BB),
            _ => Err(ParseError::UnknownPosition(s.to_string())),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.label().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
