//! Canonical starting-hand codes.
//!
//! A code names an unordered two-card hand by its ranks and whether the suits
//! match: `AKs`, `AKo`, `77`. There are 169 distinct codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::{parse_rank, Card, RANK_CHARS};
use crate::error::ParseError;

/// Canonical code for a two-card starting hand.
///
/// Pairs are never suited; for non-pairs `high > low`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HandCode {
    high: u8,
    low: u8,
    suited: bool,
}

impl HandCode {
    /// Build a code from two ranks (any order) and suitedness.
    ///
    /// The suited flag is ignored for pairs.
    pub fn new(rank1: u8, rank2: u8, suited: bool) -> Self {
        debug_assert!(rank1 < 13 && rank2 < 13, "rank must be 0-12");
        let (high, low) = if rank1 >= rank2 { (rank1, rank2) } else { (rank2, rank1) };
        Self { high, low, suited: suited && high != low }
    }

    /// Derive the code of two cards. Only ranks and suit equality matter.
    pub fn from_cards(a: Card, b: Card) -> Self {
        Self::new(a.rank(), b.rank(), a.suit() == b.suit())
    }

    /// Higher rank (0-12).
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Lower rank (0-12); equal to `high` for pairs.
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Check if the code is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Check if the code is a suited non-pair.
    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// Number of card combinations this code stands for (6, 4 or 12).
    pub fn num_combos(&self) -> u8 {
        if self.is_pair() {
            6
        } else if self.suited {
            4
        } else {
            12
        }
    }
}

impl FromStr for HandCode {
    type Err = ParseError;

    /// Parse `"AA"`, `"AKs"` or `"AKo"`; ranks may come in either order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [r1, r2] => {
                let (r1, r2) = (parse_rank(*r1)?, parse_rank(*r2)?);
                if r1 != r2 {
                    // "AK" is a range (both suited and offsuit), not a single code.
                    return Err(ParseError::InvalidHand(s.to_string()));
                }
                Ok(Self::new(r1, r2, false))
            }
            [r1, r2, suffix] => {
                let (r1, r2) = (parse_rank(*r1)?, parse_rank(*r2)?);
                if r1 == r2 {
                    return Err(ParseError::InvalidHand(s.to_string()));
                }
                match suffix {
                    's' | 'S' => Ok(Self::new(r1, r2, true)),
                    'o' | 'O' => Ok(Self::new(r1, r2, false)),
                    other => Err(ParseError::InvalidSuffix(*other)),
                }
            }
            _ => Err(ParseError::InvalidHand(s.to_string())),
        }
    }
}

impl TryFrom<String> for HandCode {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HandCode> for String {
    fn from(code: HandCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for HandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = RANK_CHARS[self.high as usize];
        let low = RANK_CHARS[self.low as usize];
        if self.is_pair() {
            write!(f, "{}{}", high, low)
        } else {
            write!(f, "{}{}{}", high, low, if self.suited { 's' } else { 'o' })
        }
    }
}

impl fmt::Debug for HandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::HoleCards;

    fn code(s: &str) -> HandCode {
        let hole: HoleCards = s.parse().unwrap();
        hole.hand_code()
    }

    #[test]
    fn test_from_cards() {
        assert_eq!(code("Ah Kh").to_string(), "AKs");
        assert_eq!(code("As Kd").to_string(), "AKo");
        assert_eq!(code("9c 9d").to_string(), "99");
        assert_eq!(code("7s 2s").to_string(), "72s");
        assert_eq!(code("2s 7s").to_string(), "72s");
    }

    #[test]
    fn test_symmetric_for_every_card_pair() {
        for a in 0..52u8 {
            for b in 0..52u8 {
                if a == b {
                    continue;
                }
                let (ca, cb) = (Card::from_id(a), Card::from_id(b));
                assert_eq!(HandCode::from_cards(ca, cb), HandCode::from_cards(cb, ca));
            }
        }
    }

    #[test]
    fn test_only_suit_equality_matters() {
        assert_eq!(code("Ah Kh"), code("Ac Kc"));
        assert_eq!(code("Ah Kd"), code("As Kc"));
    }

    #[test]
    fn test_pairs_collapse() {
        let aa = code("As Ah");
        assert!(aa.is_pair());
        assert!(!aa.is_suited());
        assert_eq!(aa.to_string().len(), 2);
        assert_eq!(aa.num_combos(), 6);
    }

    #[test]
    fn test_parse() {
        let aks: HandCode = "AKs".parse().unwrap();
        assert_eq!((aks.high(), aks.low(), aks.is_suited()), (12, 11, true));
        assert_eq!("KAo".parse::<HandCode>().unwrap().to_string(), "AKo");
        assert_eq!("tt".parse::<HandCode>().unwrap().to_string(), "TT");

        assert!(matches!("AK".parse::<HandCode>(), Err(ParseError::InvalidHand(_))));
        assert!(matches!("AAs".parse::<HandCode>(), Err(ParseError::InvalidHand(_))));
        assert_eq!("AKx".parse::<HandCode>(), Err(ParseError::InvalidSuffix('x')));
        assert_eq!("A1s".parse::<HandCode>(), Err(ParseError::InvalidRank('1')));
    }

    #[test]
    fn test_169_codes() {
        let mut codes = std::collections::HashSet::new();
        for a in 0..52u8 {
            for b in (a + 1)..52u8 {
                codes.insert(HandCode::from_cards(Card::from_id(a), Card::from_id(b)));
            }
        }
        assert_eq!(codes.len(), 169);
        let combos: u32 = codes.iter().map(|c| c.num_combos() as u32).sum();
        assert_eq!(combos, 1326);
    }
}
