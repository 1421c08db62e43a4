//! The decision engine entry point.

use std::sync::Arc;

use super::decision::{postflop_decision, preflop_decision};
use super::heuristics::{fold_equity_estimate, pot_odds};
use super::profile::OpponentProfile;
use super::recommendation::{Analysis, Recommendation};
use super::spot::{EconomicState, Spot};
use crate::cards::{Board, Card, HoleCards, Street};
use crate::config::AdvisorConfig;
use crate::equity::{EquitySource, SimulatedEquity};
use crate::error::{AdvisorError, ConfigError};
use crate::tables::{Position, RangeTables};

/// Turns a decision point into a [`Recommendation`].
///
/// An analyzer owns a set of range tables and an equity source. It keeps no
/// per-call state, so one instance can serve many threads.
///
/// # Example
/// ```
/// use holdem_advisor::{Analyzer, Board, EconomicState, OpponentProfile, Position};
///
/// let analyzer: Analyzer = Analyzer::default();
/// let rec = analyzer
///     .analyze(
///         &"AhAs".parse().unwrap(),
///         &Board::new(),
///         Position::BTN,
///         &EconomicState::new(10.0, 0.0, 1000.0),
///         &OpponentProfile::default(),
///         None,
///     )
///     .unwrap();
/// assert_eq!(rec.to_string(), "RAISE 30");
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer<E = SimulatedEquity> {
    tables: Arc<RangeTables>,
    equity: E,
}

impl Analyzer<SimulatedEquity> {
    /// Build an analyzer from a validated configuration.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tables = config.load_tables()?;
        Ok(Self::with_tables(tables, SimulatedEquity::new(config.equity.clone())))
    }
}

impl Default for Analyzer<SimulatedEquity> {
    fn default() -> Self {
        Self::new(SimulatedEquity::default())
    }
}

impl<E: EquitySource> Analyzer<E> {
    /// Create an analyzer over the built-in tables.
    pub fn new(equity: E) -> Self {
        Self::with_tables(RangeTables::builtin(), equity)
    }

    /// Create an analyzer over a specific table set.
    pub fn with_tables(tables: Arc<RangeTables>, equity: E) -> Self {
        Self { tables, equity }
    }

    /// Get the range tables.
    pub fn tables(&self) -> &RangeTables {
        &self.tables
    }

    /// Get the equity source.
    pub fn equity_source(&self) -> &E {
        &self.equity
    }

    /// Recommend an action.
    ///
    /// An empty board takes the preflop branch, which uses the range tables
    /// only. Any other legal board asks the equity source: heads-up against
    /// `villain` when it is known, otherwise against a random holding.
    pub fn analyze(
        &self,
        hole: &HoleCards,
        board: &Board,
        hero: Position,
        economics: &EconomicState,
        profile: &OpponentProfile,
        villain: Option<&HoleCards>,
    ) -> Result<Recommendation, AdvisorError> {
        self.analyze_detailed(hole, board, hero, economics, profile, villain)
            .map(|analysis| analysis.recommendation)
    }

    /// Like [`analyze`](Self::analyze), but also returns the figures behind
    /// the recommendation.
    pub fn analyze_detailed(
        &self,
        hole: &HoleCards,
        board: &Board,
        hero: Position,
        economics: &EconomicState,
        profile: &OpponentProfile,
        villain: Option<&HoleCards>,
    ) -> Result<Analysis, AdvisorError> {
        let street = board.street().ok_or(AdvisorError::InvalidBoard(board.len()))?;
        warn_on_duplicates(hole, board, villain);

        let hand = hole.hand_code();
        let hand_strength = self.tables.hand_strength(hand);
        let pot_odds = pot_odds(economics.to_call, economics.pot_size);
        let fold_equity = fold_equity_estimate(profile);

        let (recommendation, equity) = match street {
            Street::Preflop => (preflop_decision(&self.tables, hand, hero, economics), None),
            _ => {
                let raw = match villain {
                    Some(villain) => self.equity.heads_up(hole, villain, board)?,
                    None => self.equity.vs_range(hole, board)?,
                };
                let equity = raw * 100.0;
                let rec = postflop_decision(equity, pot_odds, fold_equity, economics, profile);
                (rec, Some(equity))
            }
        };

        log::debug!("{} {} on {} ({}): {}", hero, hole, street, board, recommendation);

        Ok(Analysis {
            recommendation,
            hand,
            hand_strength,
            street,
            pot_odds,
            fold_equity,
            equity,
        })
    }

    /// Analyze a [`Spot`] read from batch input.
    pub fn analyze_spot(&self, spot: &Spot) -> Result<Analysis, AdvisorError> {
        self.analyze_detailed(
            &spot.hand,
            &spot.board,
            spot.position,
            &spot.economics,
            &spot.opponent,
            spot.villain.as_ref(),
        )
    }
}

/// The same card in two places is a caller error, but the engine still
/// answers.
fn warn_on_duplicates(hole: &HoleCards, board: &Board, villain: Option<&HoleCards>) {
    let mut seen = 0u64;
    let cards = hole
        .cards()
        .into_iter()
        .chain(board.cards().iter().copied())
        .chain(villain.into_iter().flat_map(|v| v.cards()));

    let duplicates: Vec<Card> = cards
        .filter(|card| {
            let bit = 1u64 << card.id();
            let dup = seen & bit != 0;
            seen |= bit;
            dup
        })
        .collect();

    if !duplicates.is_empty() {
        log::warn!("duplicate cards in input: {:?}", duplicates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recommendation::Action;
    use crate::equity::EquityConfig;
    use crate::error::EquityError;

    fn hole(s: &str) -> HoleCards {
        s.parse().unwrap()
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn fast() -> Analyzer {
        Analyzer::new(SimulatedEquity::new(EquityConfig::fast()))
    }

    #[test]
    fn test_preflop_skips_equity() {
        let analysis = fast()
            .analyze_detailed(
                &hole("AhAs"),
                &Board::new(),
                Position::BTN,
                &EconomicState::new(10.0, 0.0, 1000.0),
                &OpponentProfile::default(),
                None,
            )
            .unwrap();
        assert_eq!(analysis.street, Street::Preflop);
        assert_eq!(analysis.equity, None);
        assert_eq!(analysis.hand_strength, 10.0);
        assert_eq!(analysis.recommendation.action, Action::Raise);
        assert_eq!(analysis.recommendation.amount, 30.0);
    }

    #[test]
    fn test_river_nuts_value_raise() {
        let analysis = fast()
            .analyze_detailed(
                &hole("AsKs"),
                &board("Qs Js Ts 2d 3c"),
                Position::CO,
                &EconomicState::new(100.0, 50.0, 1000.0),
                &OpponentProfile::default(),
                None,
            )
            .unwrap();
        assert_eq!(analysis.street, Street::River);
        assert_eq!(analysis.equity, Some(100.0));
        assert_eq!(analysis.recommendation.action, Action::Raise);
        assert_eq!(analysis.recommendation.amount, 65.0);
    }

    #[test]
    fn test_known_villain_uses_heads_up() {
        // Drawing dead on the river.
        let rec = fast()
            .analyze(
                &hole("KhKd"),
                &board("Qs Jc 7d 3s 2h"),
                Position::BB,
                &EconomicState::new(100.0, 50.0, 1000.0),
                &OpponentProfile::default(),
                Some(&hole("AhAd")),
            )
            .unwrap();
        assert_eq!(rec.action, Action::Fold);
        assert_eq!(rec.amount, 0.0);
    }

    #[test]
    fn test_invalid_board_length() {
        let short: Board = serde_json::from_str(r#"["2c","3d"]"#).unwrap();
        let err = fast()
            .analyze(
                &hole("AhAs"),
                &short,
                Position::BTN,
                &EconomicState::new(10.0, 2.0, 100.0),
                &OpponentProfile::default(),
                None,
            )
            .unwrap_err();
        assert_eq!(err, AdvisorError::InvalidBoard(2));
    }

    #[test]
    fn test_equity_error_propagates() {
        let broken = Analyzer::new(SimulatedEquity::new(EquityConfig::fast().with_samples(0).with_exhaustive_limit(0)));
        let err = broken
            .analyze(
                &hole("AhAs"),
                &board("Qs Jc 7d"),
                Position::BTN,
                &EconomicState::new(10.0, 2.0, 100.0),
                &OpponentProfile::default(),
                None,
            )
            .unwrap_err();
        assert_eq!(err, AdvisorError::Equity(EquityError::NoSamples));
    }

    #[test]
    fn test_duplicate_cards_do_not_panic() {
        let rec = fast().analyze(
            &hole("AhAs"),
            &board("Ah Kd 2c 3c 4c"),
            Position::BTN,
            &EconomicState::new(10.0, 2.0, 100.0),
            &OpponentProfile::default(),
            Some(&hole("AhKd")),
        );
        assert!(rec.is_ok());
    }

    #[test]
    fn test_analyze_spot() {
        let spot = Spot::new(
            hole("7h2s"),
            Board::new(),
            Position::UTG,
            EconomicState::new(100.0, 10.0, 1000.0),
        );
        let analysis = fast().analyze_spot(&spot).unwrap();
        assert_eq!(analysis.recommendation, Recommendation::fold("Pot odds unfavorable for a call"));
        assert_eq!(analysis.hand.to_string(), "72o");
    }
}
