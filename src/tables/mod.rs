//! Preflop lookup tables.
//!
//! Three read-only tables drive the preflop branch of the engine:
//!
//! - opening ranges per seat
//! - 3-bet ranges keyed by the raiser's seat
//! - a 1-10 hand-strength score per hand code
//!
//! Missing entries are never errors: an absent seat means "not in range" and
//! an absent hand scores [`DEFAULT_STRENGTH`]. The built-in set is built once
//! per process and shared; alternative sets can be loaded from JSON.

pub mod data;
pub mod position;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::cards::{HandCode, HandRange};
use crate::error::ConfigError;
pub use position::Position;

/// Strength reported for hands absent from the strength table.
pub const DEFAULT_STRENGTH: f64 = 5.0;

static BUILTIN: Lazy<Arc<RangeTables>> = Lazy::new(|| {
    Arc::new(RangeTables {
        opening: ranges_from_data(data::OPENING),
        three_bet: ranges_from_data(data::THREE_BET),
        strength: data::STRENGTH
            .iter()
            .map(|&(code, score)| (builtin_code(code), score))
            .collect(),
    })
});

fn ranges_from_data(entries: &[(Position, &[&str])]) -> FxHashMap<Position, HandRange> {
    entries
        .iter()
        .map(|&(pos, codes)| (pos, codes.iter().map(|c| builtin_code(c)).collect()))
        .collect()
}

fn builtin_code(code: &str) -> HandCode {
    code.parse().expect("built-in table holds an invalid hand code")
}

/// A complete set of preflop lookup tables.
#[derive(Debug, Clone, Default)]
pub struct RangeTables {
    opening: FxHashMap<Position, HandRange>,
    three_bet: FxHashMap<Position, HandRange>,
    strength: FxHashMap<HandCode, f64>,
}

impl RangeTables {
    /// The built-in tables, initialised on first use.
    pub fn builtin() -> Arc<RangeTables> {
        Arc::clone(&BUILTIN)
    }

    /// Strength score of a hand; [`DEFAULT_STRENGTH`] when not listed.
    pub fn hand_strength(&self, code: HandCode) -> f64 {
        self.strength.get(&code).copied().unwrap_or(DEFAULT_STRENGTH)
    }

    /// True iff `code` is in the opening range for `position`.
    pub fn should_open(&self, code: HandCode, position: Position) -> bool {
        self.opening.get(&position).is_some_and(|r| r.contains(code))
    }

    /// True iff `code` is in the 3-bet range against a raise from `raiser`.
    pub fn should_three_bet(&self, code: HandCode, raiser: Position) -> bool {
        self.three_bet.get(&raiser).is_some_and(|r| r.contains(code))
    }

    /// Opening range for a seat, if one is defined.
    pub fn opening_range(&self, position: Position) -> Option<&HandRange> {
        self.opening.get(&position)
    }

    /// 3-bet range against a raiser's seat, if one is defined.
    pub fn three_bet_range(&self, raiser: Position) -> Option<&HandRange> {
        self.three_bet.get(&raiser)
    }

    /// Load tables from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse tables from JSON.
    ///
    /// ```json
    /// {
    ///   "opening":   { "BTN": ["22+", "A2s+", "KTo+"] },
    ///   "three_bet": { "CO":  ["QQ+", "AKs"] },
    ///   "strength":  { "AA": 10.0, "72o": 1.0 }
    /// }
    /// ```
    ///
    /// Range entries accept notation. A section missing from the file keeps
    /// the built-in section.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: RangeTablesFile = serde_json::from_str(json)?;
        let builtin = Self::builtin();

        let opening = match file.opening {
            Some(entries) => parse_ranges(entries)?,
            None => builtin.opening.clone(),
        };
        let three_bet = match file.three_bet {
            Some(entries) => parse_ranges(entries)?,
            None => builtin.three_bet.clone(),
        };
        let strength = match file.strength {
            Some(entries) => parse_strength(entries)?,
            None => builtin.strength.clone(),
        };

        log::debug!(
            "loaded range tables: {} opening seats, {} 3-bet seats, {} strength entries",
            opening.len(),
            three_bet.len(),
            strength.len()
        );

        Ok(Self { opening, three_bet, strength })
    }
}

#[derive(Debug, Deserialize)]
struct RangeTablesFile {
    #[serde(default)]
    opening: Option<FxHashMap<Position, Vec<String>>>,
    #[serde(default)]
    three_bet: Option<FxHashMap<Position, Vec<String>>>,
    #[serde(default)]
    strength: Option<FxHashMap<String, f64>>,
}

fn parse_ranges(
    entries: FxHashMap<Position, Vec<String>>,
) -> Result<FxHashMap<Position, HandRange>, ConfigError> {
    entries
        .into_iter()
        .map(|(pos, parts)| Ok((pos, HandRange::from_notation(&parts.join(","))?)))
        .collect()
}

fn parse_strength(entries: FxHashMap<String, f64>) -> Result<FxHashMap<HandCode, f64>, ConfigError> {
    entries
        .into_iter()
        .map(|(hand, strength)| {
            if !(1.0..=10.0).contains(&strength) {
                return Err(ConfigError::InvalidStrength { hand, strength });
            }
            Ok((hand.parse::<HandCode>()?, strength))
        })
        .collect()
}

/// Strength of a hand in the built-in table.
pub fn hand_strength(code: HandCode) -> f64 {
    BUILTIN.hand_strength(code)
}

/// Whether the built-in opening range for `position` contains `code`.
pub fn should_open(code: HandCode, position: Position) -> bool {
    BUILTIN.should_open(code, position)
}

/// Whether the built-in 3-bet range against `raiser` contains `code`.
pub fn should_three_bet(code: HandCode, raiser: Position) -> bool {
    BUILTIN.should_three_bet(code, raiser)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> HandCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_builtin_data_parses_completely() {
        let tables = RangeTables::builtin();
        for &(pos, codes) in data::OPENING {
            assert_eq!(tables.opening_range(pos).unwrap().len(), codes.len(), "{}", pos);
        }
        for &(pos, codes) in data::THREE_BET {
            assert_eq!(tables.three_bet_range(pos).unwrap().len(), codes.len(), "{}", pos);
        }
        assert_eq!(tables.strength.len(), data::STRENGTH.len());
    }

    #[test]
    fn test_should_open_matches_literal_lists() {
        for &(pos, codes) in data::OPENING {
            for a in 0..13u8 {
                for b in 0..=a {
                    for suited in [false, true] {
                        let hand = HandCode::new(a, b, suited);
                        if should_open(hand, pos) {
                            assert!(codes.contains(&hand.to_string().as_str()), "{} {}", hand, pos);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_opening_ranges() {
        assert!(should_open(code("AA"), Position::UTG));
        assert!(should_open(code("22"), Position::BTN));
        assert!(!should_open(code("22"), Position::UTG));
        assert!(!should_open(code("72o"), Position::BTN));
        assert!(should_open(code("A5o"), Position::BTN));
        assert!(!should_open(code("A5o"), Position::CO));
    }

    #[test]
    fn test_three_bet_has_no_bb_entry() {
        assert!(should_three_bet(code("AA"), Position::UTG));
        assert!(should_three_bet(code("77"), Position::SB));
        assert!(!should_three_bet(code("77"), Position::BTN));
        assert!(!should_three_bet(code("AA"), Position::BB));
        assert!(RangeTables::builtin().three_bet_range(Position::BB).is_none());
    }

    #[test]
    fn test_hand_strength_default() {
        assert_eq!(hand_strength(code("AA")), 10.0);
        assert_eq!(hand_strength(code("A5s")), 6.8);
        assert_eq!(hand_strength(code("72o")), DEFAULT_STRENGTH);
        assert_eq!(hand_strength(code("32s")), DEFAULT_STRENGTH);
    }

    #[test]
    fn test_empty_tables_never_match() {
        let empty = RangeTables::default();
        assert!(!empty.should_open(code("AA"), Position::BTN));
        assert!(!empty.should_three_bet(code("AA"), Position::BTN));
        assert_eq!(empty.hand_strength(code("AA")), DEFAULT_STRENGTH);
    }

    #[test]
    fn test_load_json_with_notation() {
        let tables = RangeTables::from_json_str(
            r#"{
                "opening": { "BTN": ["22+", "A2s+"], "dealer": [] },
                "strength": { "72o": 1.0 }
            }"#,
        );
        assert!(matches!(tables, Err(ConfigError::Parse(_))));

        let tables = RangeTables::from_json_str(
            r#"{
                "opening": { "BTN": ["22+", "A2s+"] },
                "strength": { "72o": 1.0 }
            }"#,
        )
        .unwrap();

        assert!(tables.should_open(code("55"), Position::BTN));
        assert!(tables.should_open(code("A3s"), Position::BTN));
        assert!(!tables.should_open(code("KQs"), Position::BTN));
        // Replaced section drops other seats.
        assert!(!tables.should_open(code("AA"), Position::UTG));
        // Missing section keeps the built-in one.
        assert!(tables.should_three_bet(code("AA"), Position::UTG));
        assert_eq!(tables.hand_strength(code("72o")), 1.0);
        assert_eq!(tables.hand_strength(code("AA")), DEFAULT_STRENGTH);
    }

    #[test]
    fn test_load_json_alias_keys() {
        let tables = RangeTables::from_json_str(
            r#"{
                "opening": { "cutoff": ["AA"], "utg+1": ["KK"] },
                "three_bet": { "btn": ["QQ"] }
            }"#,
        )
        .unwrap();

        assert!(tables.should_open(code("AA"), Position::CO));
        assert!(tables.should_open(code("KK"), Position::MP));
        assert!(!tables.should_open(code("KK"), Position::UTG));
        assert!(tables.should_three_bet(code("QQ"), Position::BTN));
    }

    #[test]
    fn test_load_json_rejects_bad_entries() {
        let bad_strength = RangeTables::from_json_str(r#"{ "strength": { "AA": 11.0 } }"#);
        assert!(matches!(bad_strength, Err(ConfigError::InvalidStrength { .. })));

        let bad_range = RangeTables::from_json_str(r#"{ "opening": { "CO": ["AKx"] } }"#);
        assert!(matches!(bad_range, Err(ConfigError::Range(_))));
    }
}
