//! End-to-end behaviour of the analyzer with a controllable equity source.

use std::sync::atomic::{AtomicUsize, Ordering};

use holdem_advisor::engine::{fold_equity_estimate, pot_odds};
use holdem_advisor::{
    Action, AdvisorError, Aggression, Analyzer, Board, EconomicState, EquityConfig, EquityError,
    EquitySource, HoleCards, OpponentProfile, Position, SimulatedEquity, Style,
};

/// Returns a fixed equity and counts how it was asked.
struct FixedEquity {
    equity: Result<f64, EquityError>,
    heads_up_calls: AtomicUsize,
    vs_range_calls: AtomicUsize,
}

impl FixedEquity {
    fn new(equity: f64) -> Self {
        Self::with_result(Ok(equity))
    }

    fn failing(err: EquityError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(equity: Result<f64, EquityError>) -> Self {
        Self {
            equity,
            heads_up_calls: AtomicUsize::new(0),
            vs_range_calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> (usize, usize) {
        (
            self.heads_up_calls.load(Ordering::SeqCst),
            self.vs_range_calls.load(Ordering::SeqCst),
        )
    }
}

impl EquitySource for FixedEquity {
    fn heads_up(&self, _: &HoleCards, _: &HoleCards, _: &Board) -> Result<f64, EquityError> {
        self.heads_up_calls.fetch_add(1, Ordering::SeqCst);
        self.equity.clone()
    }

    fn vs_range(&self, _: &HoleCards, _: &Board) -> Result<f64, EquityError> {
        self.vs_range_calls.fetch_add(1, Ordering::SeqCst);
        self.equity.clone()
    }
}

fn hole(s: &str) -> HoleCards {
    s.parse().unwrap()
}

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn neutral() -> OpponentProfile {
    OpponentProfile::default()
}

#[test]
fn test_preflop_aa_button_opens_three_pots() {
    let source = FixedEquity::new(0.5);
    let analyzer = Analyzer::new(&source);

    let rec = analyzer
        .analyze(
            &hole("AhAs"),
            &Board::new(),
            Position::BTN,
            &EconomicState::new(10.0, 0.0, 1000.0),
            &neutral(),
            None,
        )
        .unwrap();

    assert_eq!(rec.action, Action::Raise);
    assert_eq!(rec.amount, 30.0);
    assert_eq!(source.calls(), (0, 0), "preflop must not ask for equity");
}

#[test]
fn test_preflop_trash_folds_to_bad_price() {
    let source = FixedEquity::new(0.5);
    let analyzer = Analyzer::new(&source);

    let rec = analyzer
        .analyze(
            &hole("7h2s"),
            &Board::new(),
            Position::UTG,
            &EconomicState::new(100.0, 10.0, 1000.0),
            &neutral(),
            None,
        )
        .unwrap();

    assert_eq!(rec.action, Action::Fold);
    assert_eq!(rec.amount, 0.0);
}

#[test]
fn test_postflop_value_raise() {
    // Pot 70, call 30: pot odds 30%.
    let source = FixedEquity::new(0.70);
    let analyzer = Analyzer::new(&source);
    let economics = EconomicState::new(70.0, 30.0, 40.0);

    let analysis = analyzer
        .analyze_detailed(&hole("AhKh"), &board("Ah 7c 2d"), Position::CO, &economics, &neutral(), None)
        .unwrap();

    assert!((analysis.pot_odds - 30.0).abs() < 1e-9);
    assert!((analysis.equity.unwrap() - 70.0).abs() < 1e-9);
    assert_eq!(analysis.recommendation.action, Action::Raise);
    assert!(analysis.recommendation.reason.starts_with("Value bet"));
    assert!(analysis.recommendation.amount <= economics.stack);
    assert_eq!(source.calls(), (0, 1));
}

#[test]
fn test_postflop_weak_hand_folds() {
    // Pot 50, call 50: pot odds 50%.
    let source = FixedEquity::new(0.10);
    let analyzer = Analyzer::new(&source);
    let profile = OpponentProfile::new(Style::Neutral, Aggression::Aggressive);
    assert_eq!(fold_equity_estimate(&profile), 40.0);

    let rec = analyzer
        .analyze(
            &hole("7h2s"),
            &board("Ah Kc Qd"),
            Position::BB,
            &EconomicState::new(50.0, 50.0, 500.0),
            &profile,
            None,
        )
        .unwrap();

    assert_eq!(rec.action, Action::Fold);
    assert_eq!(rec.amount, 0.0);
}

#[test]
fn test_known_villain_goes_heads_up() {
    let source = FixedEquity::new(0.5);
    let analyzer = Analyzer::new(&source);

    analyzer
        .analyze(
            &hole("AhKh"),
            &board("Qh Jh 2c 3d"),
            Position::BTN,
            &EconomicState::new(20.0, 10.0, 200.0),
            &neutral(),
            Some(&hole("QsQd")),
        )
        .unwrap();

    assert_eq!(source.calls(), (1, 0));
}

#[test]
fn test_equity_failure_propagates() {
    let source = FixedEquity::failing(EquityError::Unavailable("offline".to_string()));
    let analyzer = Analyzer::new(&source);

    let err = analyzer
        .analyze(
            &hole("AhKh"),
            &board("Qh Jh 2c"),
            Position::BTN,
            &EconomicState::new(20.0, 10.0, 200.0),
            &neutral(),
            None,
        )
        .unwrap_err();

    assert_eq!(err, AdvisorError::Equity(EquityError::Unavailable("offline".to_string())));
}

#[test]
fn test_raises_never_exceed_stack() {
    let hands = ["AhAs", "KdQd", "7h2s", "9c8c"];
    let boards = ["", "Ah 7c 2d", "Ah 7c 2d Ks", "Ah 7c 2d Ks 3h"];
    let profiles = [
        OpponentProfile::new(Style::Tight, Aggression::Passive),
        OpponentProfile::new(Style::Loose, Aggression::Aggressive),
        neutral(),
    ];

    for equity in [0.05, 0.35, 0.6, 0.95] {
        let source = FixedEquity::new(equity);
        let analyzer = Analyzer::new(&source);
        for hand in hands {
            for b in boards {
                for profile in &profiles {
                    for position in Position::all() {
                        let economics = EconomicState::new(400.0, 60.0, 35.0);
                        let rec = analyzer
                            .analyze(&hole(hand), &board(b), *position, &economics, profile, None)
                            .unwrap();
                        if rec.action == Action::Raise {
                            assert!(rec.amount <= economics.stack, "{} {} {}: {}", hand, b, position, rec);
                        }
                        if rec.action == Action::Fold {
                            assert_eq!(rec.amount, 0.0);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = Analyzer::new(SimulatedEquity::new(EquityConfig::fast()));
    let spot = |analyzer: &Analyzer| {
        analyzer
            .analyze_detailed(
                &hole("KdQd"),
                &board("Qs 9d 4d"),
                Position::CO,
                &EconomicState::new(30.0, 10.0, 300.0),
                &neutral(),
                None,
            )
            .unwrap()
    };

    let first = spot(&analyzer);
    let second = spot(&analyzer);
    assert_eq!(first, second);
}

#[test]
fn test_pot_odds_edges() {
    assert_eq!(pot_odds(0.0, 37.0), 0.0);
    assert_eq!(pot_odds(37.0, 0.0), 0.0);
    assert!((pot_odds(50.0, 100.0) - 33.333_333_333).abs() < 1e-6);
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Analyzer>();
}
