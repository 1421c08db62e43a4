//! Engine output types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{HandCode, Street};

/// The three actions the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Match the current bet.
    Call,
    /// Bet or raise to the recommended amount.
    Raise,
}

impl Action {
    /// Uppercase label, as shown to the player.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "FOLD",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recommended action with its size and a one-line justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// What to do.
    pub action: Action,
    /// Chips to put in; always 0 for a fold.
    pub amount: f64,
    /// Human-readable justification.
    pub reason: String,
}

impl Recommendation {
    /// A fold. The amount is always 0.
    pub fn fold(reason: impl Into<String>) -> Self {
        Self { action: Action::Fold, amount: 0.0, reason: reason.into() }
    }

    /// A call of `amount`.
    pub fn call(amount: f64, reason: impl Into<String>) -> Self {
        Self { action: Action::Call, amount, reason: reason.into() }
    }

    /// A raise to `amount`.
    pub fn raise(amount: f64, reason: impl Into<String>) -> Self {
        Self { action: Action::Raise, amount, reason: reason.into() }
    }
}

impl fmt::Display for Recommendation {
    /// `RAISE 30`, `CALL 5`, `FOLD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Fold => write!(f, "{}", self.action),
            _ => write!(f, "{} {}", self.action, self.amount),
        }
    }
}

/// A recommendation together with the figures it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// The recommended action.
    pub recommendation: Recommendation,
    /// Canonical code of the hero's hole cards.
    pub hand: HandCode,
    /// Preflop strength score of the hand (1-10).
    pub hand_strength: f64,
    /// Street derived from the board.
    pub street: Street,
    /// Pot odds, as a percentage.
    pub pot_odds: f64,
    /// Estimated fold equity, as a percentage.
    pub fold_equity: f64,
    /// Showdown equity as a percentage; `None` preflop.
    pub equity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Recommendation::raise(30.0, "open").to_string(), "RAISE 30");
        assert_eq!(Recommendation::call(5.0, "odds").to_string(), "CALL 5");
        assert_eq!(Recommendation::call(2.5, "odds").to_string(), "CALL 2.5");
        assert_eq!(Recommendation::fold("weak").to_string(), "FOLD");
    }

    #[test]
    fn test_fold_amount_is_zero() {
        assert_eq!(Recommendation::fold("weak").amount, 0.0);
    }

    #[test]
    fn test_json_uses_lowercase_action() {
        let json = serde_json::to_value(Recommendation::raise(30.0, "open")).unwrap();
        assert_eq!(json["action"], "raise");
        assert_eq!(json["amount"], 30.0);

        let back: Recommendation =
            serde_json::from_str(r#"{"action":"fold","amount":0.0,"reason":"weak"}"#).unwrap();
        assert_eq!(back.action, Action::Fold);
    }
}
