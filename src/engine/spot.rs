//! Inputs to a single decision.

use serde::{Deserialize, Serialize};

use super::profile::OpponentProfile;
use crate::cards::{Board, HoleCards};
use crate::tables::Position;

/// Chip state of the hand, in any consistent unit (chips, big blinds).
///
/// Values are taken as given: a `to_call` larger than `stack` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EconomicState {
    /// Chips already in the pot.
    pub pot_size: f64,
    /// Chips the hero must add to continue.
    pub to_call: f64,
    /// Hero's remaining stack; caps every raise.
    pub stack: f64,
}

impl EconomicState {
    /// Create an economic state.
    pub fn new(pot_size: f64, to_call: f64, stack: f64) -> Self {
        Self { pot_size, to_call, stack }
    }
}

/// A complete decision point, as read from batch input.
///
/// ```json
/// {"id": "h1", "hand": "AhKs", "board": ["Qd", "Jc", "2s"], "position": "BTN",
///  "pot_size": 10, "to_call": 2, "stack": 100,
///  "opponent": {"style": "tight", "aggression": "passive"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    /// Caller-chosen label, echoed in output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Hero's hole cards.
    pub hand: HoleCards,
    /// Community cards; empty preflop.
    #[serde(default)]
    pub board: Board,
    /// Hero's seat.
    pub position: Position,
    /// Pot, price and stack.
    #[serde(flatten)]
    pub economics: EconomicState,
    /// Read on the opponent.
    #[serde(default)]
    pub opponent: OpponentProfile,
    /// Opponent's known hole cards, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub villain: Option<HoleCards>,
}

impl Spot {
    /// A spot with a neutral opponent and no known villain hand.
    pub fn new(hand: HoleCards, board: Board, position: Position, economics: EconomicState) -> Self {
        Self {
            id: None,
            hand,
            board,
            position,
            economics,
            opponent: OpponentProfile::default(),
            villain: None,
        }
    }

    /// Builder method: set the opponent profile.
    pub fn with_opponent(mut self, opponent: OpponentProfile) -> Self {
        self.opponent = opponent;
        self
    }

    /// Builder method: set the opponent's known hand.
    pub fn with_villain(mut self, villain: HoleCards) -> Self {
        self.villain = Some(villain);
        self
    }

    /// Builder method: set the label.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
