//! Hand range utilities.
//!
//! A `HandRange` is a set of hand codes, built from literal codes or from
//! range notation such as `"TT+, AQs+, A5s-A2s, KQ"`.

use rustc_hash::FxHashSet;
use std::str::FromStr;

use super::card::parse_rank;
use super::hand_code::HandCode;
use crate::error::ParseError;

/// A poker range represented as a set of hand codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandRange {
    codes: FxHashSet<HandCode>,
}

impl HandRange {
    /// Create an empty range.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a hand code to the range.
    pub fn add(&mut self, code: HandCode) {
        self.codes.insert(code);
    }

    /// Check if a hand code is in the range.
    pub fn contains(&self, code: HandCode) -> bool {
        self.codes.contains(&code)
    }

    /// Number of distinct codes in the range.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the range holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Count the total number of card combos in the range.
    pub fn num_combos(&self) -> usize {
        self.codes.iter().map(|c| c.num_combos() as usize).sum()
    }

    /// Iterate over the codes in the range (unordered).
    pub fn iter(&self) -> impl Iterator<Item = HandCode> + '_ {
        self.codes.iter().copied()
    }

    /// Parse a range from comma-separated notation.
    ///
    /// Supports: `"AA"`, `"AKs"`, `"AKo"`, `"AK"` (both suited and offsuit),
    /// `"TT+"`, `"AQs+"`, `"A5s-A2s"`, `"99-66"`.
    pub fn from_notation(notation: &str) -> Result<Self, ParseError> {
        let mut range = Self::empty();
        for part in notation.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            range.parse_part(part)?;
        }
        Ok(range)
    }

    fn parse_part(&mut self, part: &str) -> Result<(), ParseError> {
        if let Some((start, end)) = part.split_once('-') {
            return self.parse_span(start.trim(), end.trim());
        }
        if let Some(base) = part.strip_suffix('+') {
            return self.parse_plus(base);
        }
        let (high, low, kinds) = split_hand(part)?;
        self.add_kinds(high, low, kinds);
        Ok(())
    }

    /// `TT+` means TT..AA; `AQs+` means AQs, AKs (kicker climbs to below the top card).
    fn parse_plus(&mut self, base: &str) -> Result<(), ParseError> {
        let (high, low, kinds) = split_hand(base)?;
        if high == low {
            for rank in high..13 {
                self.add(HandCode::new(rank, rank, false));
            }
        } else {
            for kicker in low..high {
                self.add_kinds(high, kicker, kinds);
            }
        }
        Ok(())
    }

    /// `A5s-A2s` keeps the top card and walks the kicker; `99-66` walks pairs.
    fn parse_span(&mut self, start: &str, end: &str) -> Result<(), ParseError> {
        let (s_high, s_low, s_kinds) = split_hand(start)?;
        let (e_high, e_low, e_kinds) = split_hand(end)?;
        let invalid = || ParseError::InvalidRange(format!("{}-{}", start, end));

        if s_high == s_low && e_high == e_low {
            for rank in s_high.min(e_high)..=s_high.max(e_high) {
                self.add(HandCode::new(rank, rank, false));
            }
            return Ok(());
        }

        if s_high != e_high || s_kinds != e_kinds || s_high == s_low || e_high == e_low {
            return Err(invalid());
        }

        for kicker in s_low.min(e_low)..=s_low.max(e_low) {
            self.add_kinds(s_high, kicker, s_kinds);
        }
        Ok(())
    }

    fn add_kinds(&mut self, high: u8, low: u8, kinds: Kinds) {
        if high == low {
            self.add(HandCode::new(high, low, false));
            return;
        }
        if matches!(kinds, Kinds::Suited | Kinds::Both) {
            self.add(HandCode::new(high, low, true));
        }
        if matches!(kinds, Kinds::Offsuit | Kinds::Both) {
            self.add(HandCode::new(high, low, false));
        }
    }
}

impl FromStr for HandRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl FromIterator<HandCode> for HandRange {
    fn from_iter<I: IntoIterator<Item = HandCode>>(iter: I) -> Self {
        Self { codes: iter.into_iter().collect() }
    }
}

/// Which suit combinations a notation token covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kinds {
    Suited,
    Offsuit,
    Both,
}

/// Split a token like `"AKs"`, `"KA"`, `"77"` into (high, low, kinds).
fn split_hand(token: &str) -> Result<(u8, u8, Kinds), ParseError> {
    let chars: Vec<char> = token.chars().collect();
    let (r1, r2, kinds) = match chars.as_slice() {
        [r1, r2] => (*r1, *r2, Kinds::Both),
        [r1, r2, 's' | 'S'] => (*r1, *r2, Kinds::Suited),
        [r1, r2, 'o' | 'O'] => (*r1, *r2, Kinds::Offsuit),
        [_, _, other] => return Err(ParseError::InvalidSuffix(*other)),
        _ => return Err(ParseError::InvalidHand(token.to_string())),
    };
    let (r1, r2) = (parse_rank(r1)?, parse_rank(r2)?);
    if r1 == r2 && kinds != Kinds::Both {
        return Err(ParseError::InvalidHand(token.to_string()));
    }
    Ok((r1.max(r2), r1.min(r2), kinds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(range: &HandRange) -> Vec<String> {
        let mut v: Vec<String> = range.iter().map(|c| c.to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_parse_pairs() {
        let range = HandRange::from_notation("AA").unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.num_combos(), 6);

        let range = HandRange::from_notation("AA, KK, QQ").unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.num_combos(), 18);
    }

    #[test]
    fn test_parse_suited_offsuit() {
        let suited = HandRange::from_notation("AKs").unwrap();
        assert_eq!(suited.num_combos(), 4);

        let offsuit = HandRange::from_notation("AKo").unwrap();
        assert_eq!(offsuit.num_combos(), 12);

        let both = HandRange::from_notation("AK").unwrap();
        assert_eq!(both.len(), 2);
        assert_eq!(both.num_combos(), 16);
    }

    #[test]
    fn test_parse_plus() {
        let pairs = HandRange::from_notation("TT+").unwrap();
        assert_eq!(codes(&pairs), vec!["AA", "JJ", "KK", "QQ", "TT"]);

        let aces = HandRange::from_notation("AQs+").unwrap();
        assert_eq!(codes(&aces), vec!["AKs", "AQs"]);

        let kings = HandRange::from_notation("KTo+").unwrap();
        assert_eq!(codes(&kings), vec!["KJo", "KQo", "KTo"]);
    }

    #[test]
    fn test_parse_span() {
        let wheel = HandRange::from_notation("A5s-A2s").unwrap();
        assert_eq!(codes(&wheel), vec!["A2s", "A3s", "A4s", "A5s"]);

        let pairs = HandRange::from_notation("66-99").unwrap();
        assert_eq!(pairs.len(), 4);

        assert!(matches!(
            HandRange::from_notation("A5s-K2s"),
            Err(ParseError::InvalidRange(_))
        ));
        assert!(matches!(
            HandRange::from_notation("A5s-A2o"),
            Err(ParseError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(HandRange::from_notation("AAs"), Err(ParseError::InvalidHand(_))));
        assert_eq!(HandRange::from_notation("AKx"), Err(ParseError::InvalidSuffix('x')));
        assert_eq!(HandRange::from_notation("ZZ"), Err(ParseError::InvalidRank('Z')));
    }

    #[test]
    fn test_contains() {
        let range: HandRange = "JJ+, AKs".parse().unwrap();
        assert!(range.contains("QQ".parse().unwrap()));
        assert!(range.contains("AKs".parse().unwrap()));
        assert!(!range.contains("AKo".parse().unwrap()));
        assert!(!range.contains("TT".parse().unwrap()));
    }
}
