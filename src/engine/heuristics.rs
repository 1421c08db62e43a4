//! Pot odds, fold equity and bet sizing.
//!
//! All figures are percentages in `[0, 100]` except bet sizes, which are in
//! the same chip unit as the pot.

use super::profile::{Aggression, OpponentProfile, Style};

/// Fold equity against an opponent with no read.
pub const BASE_FOLD_EQUITY: f64 = 50.0;

/// Value bets: fraction of the pot.
pub const VALUE_BET_FRACTION: f64 = 0.65;

/// Bluffs and semi-bluffs: fraction of the pot.
pub const BLUFF_FRACTION: f64 = 0.40;

/// Share of the final pot the hero must put in to call, as a percentage.
///
/// Returns 0 when either operand is 0.
pub fn pot_odds(to_call: f64, pot_size: f64) -> f64 {
    if to_call == 0.0 || pot_size == 0.0 {
        return 0.0;
    }
    to_call / (pot_size + to_call) * 100.0
}

/// How often a bet is expected to take the pot down immediately.
pub fn fold_equity_estimate(profile: &OpponentProfile) -> f64 {
    let style = match profile.style {
        Style::Tight => 15.0,
        Style::Loose => -15.0,
        Style::Neutral => 0.0,
    };
    let aggression = match profile.aggression {
        Aggression::Passive => 10.0,
        Aggression::Aggressive => -10.0,
        Aggression::Neutral => 0.0,
    };
    (BASE_FOLD_EQUITY + style + aggression).clamp(0.0, 100.0)
}

/// Bet size for a value bet or a bluff, rounded to cents.
///
/// Value bets grow against loose players (they call wider) and shrink
/// against tight ones. Bluffs grow against aggressive players and shrink
/// against passive ones. `strength` (0-10) does not change the size; it is
/// only reported in the debug log. Callers cap the result by the stack.
pub fn bet_sizing(pot_size: f64, strength: f64, profile: &OpponentProfile, is_value_bet: bool) -> f64 {
    let size = if is_value_bet {
        let factor = match profile.style {
            Style::Loose => 1.2,
            Style::Tight => 0.8,
            Style::Neutral => 1.0,
        };
        pot_size * VALUE_BET_FRACTION * factor
    } else {
        let factor = match profile.aggression {
            Aggression::Aggressive => 1.2,
            Aggression::Passive => 0.8,
            Aggression::Neutral => 1.0,
        };
        pot_size * BLUFF_FRACTION * factor
    };

    log::debug!(
        "sizing {} bet: pot {}, strength {:.1}, vs {} -> {:.2}",
        if is_value_bet { "value" } else { "bluff" },
        pot_size,
        strength,
        profile,
        size
    );

    round_cents(size)
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
