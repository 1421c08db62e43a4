//! Decision engine.
//!
//! Maps a decision point (hole cards, board, seat, pot economics and a read
//! on the opponent) to one [`Recommendation`]:
//!
//! - Preflop (empty board): opening range, then 3-bet range, then pot odds.
//!   No equity is computed.
//! - Postflop: showdown equity from an [`EquitySource`](crate::equity::EquitySource)
//!   is compared with pot odds and fold equity.
//!
//! The rules live in [`decision`] as pure functions over plain numbers;
//! [`Analyzer`] wires them to the tables and the equity source.

pub mod analyzer;
pub mod decision;
pub mod heuristics;
pub mod profile;
pub mod recommendation;
pub mod spot;

pub use analyzer::Analyzer;
pub use decision::{postflop_decision, preflop_decision};
pub use heuristics::{bet_sizing, fold_equity_estimate, pot_odds};
pub use profile::{Aggression, OpponentProfile, Style};
pub use recommendation::{Action, Analysis, Recommendation};
pub use spot::{EconomicState, Spot};
