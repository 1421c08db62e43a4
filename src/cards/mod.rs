//! Cards, starting-hand codes, ranges and hand evaluation.
//!
//! ## Modules
//!
//! - `card`: Card, hole cards, board, deck and street representations
//! - `hand_code`: Canonical 169-class starting-hand codes (`AKs`, `77`)
//! - `range`: Sets of hand codes and range notation parsing
//! - `hand_eval`: 5-7 card hand ranking

pub mod card;
pub mod hand_code;
pub mod hand_eval;
pub mod range;

pub use card::{parse_cards, Board, Card, Deck, HoleCards, Street};
pub use hand_code::HandCode;
pub use hand_eval::{HandCategory, HandEvaluator, HandRank};
pub use range::HandRange;
