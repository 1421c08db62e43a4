//! Preflop and postflop decision rules.
//!
//! Each function walks its rules in priority order and returns on the first
//! one that fires, so exactly one recommendation comes out. Raise sizes are
//! always capped by the hero's stack.

use super::heuristics::{bet_sizing, pot_odds};
use super::profile::OpponentProfile;
use super::recommendation::Recommendation;
use super::spot::EconomicState;
use crate::cards::HandCode;
use crate::tables::{Position, RangeTables};

/// Opening raise size, in multiples of the pot.
pub const OPEN_MULTIPLIER: f64 = 3.0;

/// 3-bet size, in multiples of the amount to call.
pub const THREE_BET_MULTIPLIER: f64 = 3.0;

/// Preflop calls need pot odds of at least this percentage.
pub const MIN_PREFLOP_POT_ODDS: f64 = 20.0;

/// Equity above pot odds by more than this margin is a value raise.
pub const VALUE_MARGIN: f64 = 5.0;

/// Equity within this margin below pot odds is still a call.
pub const CALL_MARGIN: f64 = 5.0;

/// Fold equity a semi-bluff needs to exceed.
pub const SEMI_BLUFF_FOLD_EQUITY: f64 = 60.0;

/// Equity a semi-bluff needs to exceed.
pub const SEMI_BLUFF_EQUITY: f64 = 30.0;

/// Decide preflop from the range tables alone.
///
/// The 3-bet table is looked up with the hero's own seat, after the
/// opening check.
pub fn preflop_decision(
    tables: &RangeTables,
    hand: HandCode,
    hero: Position,
    economics: &EconomicState,
) -> Recommendation {
    let EconomicState { pot_size, to_call, stack } = *economics;

    if tables.should_open(hand, hero) {
        log::debug!("{} is in the {} opening range", hand, hero);
        return Recommendation::raise(
            (OPEN_MULTIPLIER * pot_size).min(stack),
            format!("Strong hand ({}) to open from {}", hand, hero),
        );
    }

    if tables.should_three_bet(hand, hero) {
        log::debug!("{} is in the {} 3-bet range", hand, hero);
        return Recommendation::raise(
            (THREE_BET_MULTIPLIER * to_call).min(stack),
            format!("Ideal 3-bet hand ({}) from {}", hand, hero),
        );
    }

    let odds = pot_odds(to_call, pot_size);
    log::debug!("{} from {} is outside both ranges, pot odds {:.1}%", hand, hero, odds);
    if odds < MIN_PREFLOP_POT_ODDS {
        return Recommendation::fold("Pot odds unfavorable for a call");
    }
    Recommendation::call(to_call, "Pot odds favorable for a call")
}

/// Decide postflop from equity, pot odds and fold equity (all percentages).
pub fn postflop_decision(
    equity: f64,
    pot_odds: f64,
    fold_equity: f64,
    economics: &EconomicState,
    profile: &OpponentProfile,
) -> Recommendation {
    let EconomicState { pot_size, to_call, stack } = *economics;

    if equity > pot_odds + VALUE_MARGIN {
        let size = bet_sizing(pot_size, equity / 10.0, profile, true);
        log::debug!("value raise: equity {:.1}% vs pot odds {:.1}%", equity, pot_odds);
        return Recommendation::raise(
            size.min(stack),
            format!("Value bet with {:.1}% equity vs {:.1}% pot odds", equity, pot_odds),
        );
    }

    if fold_equity > SEMI_BLUFF_FOLD_EQUITY && equity > SEMI_BLUFF_EQUITY {
        let size = bet_sizing(pot_size, equity / 10.0, profile, false);
        log::debug!("semi-bluff: fold equity {:.0}%, equity {:.1}%", fold_equity, equity);
        return Recommendation::raise(
            size.min(stack),
            format!(
                "Semi-bluff with {:.0}% fold equity and {:.1}% equity",
                fold_equity, equity
            ),
        );
    }

    if equity > pot_odds - CALL_MARGIN {
        log::debug!("marginal call: equity {:.1}% vs pot odds {:.1}%", equity, pot_odds);
        return Recommendation::call(
            to_call,
            format!(
                "Call with marginal odds ({:.1}% equity vs {:.1}% pot odds)",
                equity, pot_odds
            ),
        );
    }

    log::debug!("fold: equity {:.1}% vs pot odds {:.1}%", equity, pot_odds);
    Recommendation::fold(format!(
        "Fold with insufficient equity ({:.1}% vs {:.1}% needed)",
        equity, pot_odds
    ))
}
