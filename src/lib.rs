//! # Holdem Advisor
//!
//! A decision engine for no-limit hold'em that recommends fold, call or
//! raise (with a size) from the hero's cards, the board, the seat, the pot
//! economics and a read on the opponent.
//!
//! ## Features
//!
//! - **Preflop Ranges**: Opening and 3-bet ranges per seat, replaceable from JSON
//! - **Postflop Heuristics**: Equity vs pot odds, fold equity, profile-aware sizing
//! - **Deterministic Equity**: Exhaustive enumeration or seeded parallel Monte Carlo
//! - **Pluggable Equity**: Any [`EquitySource`] can back the engine
//!
//! ## Quick Start
//!
//! ```
//! use holdem_advisor::{Analyzer, Board, EconomicState, OpponentProfile, Position};
//!
//! let analyzer: Analyzer = Analyzer::default();
//! let rec = analyzer
//!     .analyze(
//!         &"AhAs".parse().unwrap(),
//!         &Board::new(),
//!         Position::BTN,
//!         &EconomicState::new(10.0, 0.0, 1000.0),
//!         &OpponentProfile::default(),
//!         None,
//!     )
//!     .unwrap();
//!
//! println!("{} ({})", rec, rec.reason);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, hand codes, ranges and hand evaluation
//! - [`tables`]: Built-in and file-loaded preflop tables
//! - [`equity`]: Equity source trait and the simulated implementation
//! - [`engine`]: Heuristics, decision rules and the analyzer
//! - [`config`]: JSON configuration
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Analyzer (stateless)                        │
//! │  - Street routing         - Pot odds / fold equity              │
//! │  - Preflop rules          - Postflop rules + sizing             │
//! └─────────────────────────────────────────────────────────────────┘
//!                  │                               │
//!          preflop │                               │ postflop
//!                  ▼                               ▼
//!         ┌─────────────────┐            ┌───────────────────┐
//!         │   RangeTables   │            │   EquitySource    │
//!         │ open / 3bet /   │            │ SimulatedEquity:  │
//!         │ strength        │            │ enumerate or MC   │
//!         └─────────────────┘            └───────────────────┘
//!                                                  │
//!                                                  ▼
//!                                        ┌───────────────────┐
//!                                        │   HandEvaluator   │
//!                                        └───────────────────┘
//! ```

#![warn(missing_docs)]

/// Cards, hand codes, range notation and hand evaluation.
pub mod cards;

/// Advisor configuration.
pub mod config;

/// The decision engine.
pub mod engine;

/// Equity calculation.
pub mod equity;

/// Error types.
pub mod error;

/// Preflop lookup tables.
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use cards::{Board, Card, HandCode, HandRange, HoleCards, Street};
pub use config::AdvisorConfig;
pub use engine::{
    Action, Aggression, Analysis, Analyzer, EconomicState, OpponentProfile, Recommendation, Spot,
    Style,
};
pub use equity::{EquityConfig, EquitySource, SimulatedEquity};
pub use error::{AdvisorError, ConfigError, EquityError, ParseError};
pub use tables::{Position, RangeTables};
