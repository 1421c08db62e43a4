//! Cards and card collections.
//!
//! A card is a single byte, `rank * 4 + suit`, with ranks `0..13` running
//! from deuce to ace and suits `0..4` in `c d h s` order. Everything that
//! holds cards (hole cards, boards, decks) is built on that id, so a set of
//! cards fits in a `u64` bitmask.
//!
//! Text input is forgiving: `"AhKs"`, `"Ah Ks"`, `"ah,ks"`, `"A♥ K♠"` and
//! `"10h"` all parse.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hand_code::HandCode;
use crate::error::ParseError;

/// Rank symbols, deuce first.
pub(crate) const RANK_CHARS: [char; 13] =
    ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

const SUITS: [(char, char); 4] = [('c', '♣'), ('d', '♦'), ('h', '♥'), ('s', '♠')];

/// Index of a rank symbol, either case.
pub(crate) fn parse_rank(c: char) -> Result<u8, ParseError> {
    let upper = c.to_ascii_uppercase();
    match RANK_CHARS.iter().position(|&r| r == upper) {
        Some(rank) => Ok(rank as u8),
        None => Err(ParseError::InvalidRank(c)),
    }
}

fn parse_suit(c: char) -> Result<u8, ParseError> {
    let lower = c.to_ascii_lowercase();
    match SUITS.iter().position(|&(letter, symbol)| letter == lower || symbol == c) {
        Some(suit) => Ok(suit as u8),
        None => Err(ParseError::InvalidSuit(c)),
    }
}

/// Parse any number of cards; separators (whitespace, commas) are optional.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseError> {
    let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != ',').collect();
    let mut cards = Vec::with_capacity(symbols.len() / 2);
    let mut rest = symbols.as_slice();

    while !rest.is_empty() {
        let (rank, tail) = match rest {
            ['1', '0', tail @ ..] => (8, tail),
            [r, tail @ ..] => (parse_rank(*r)?, tail),
            [] => break,
        };
        let Some((suit, tail)) = tail.split_first() else {
            return Err(ParseError::IncompleteCard(s.to_string()));
        };
        cards.push(Card::new(rank, parse_suit(*suit)?));
        rest = tail;
    }

    Ok(cards)
}

/// One of the 52 cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    id: u8,
}

impl Card {
    /// Card with the given rank (0 = deuce, 12 = ace) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < 13 && suit < 4);
        Self { id: rank * 4 + suit }
    }

    /// Card with the given id (`rank * 4 + suit`).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52);
        Self { id }
    }

    /// `rank * 4 + suit`, in `0..52`.
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Rank, 0 (deuce) through 12 (ace).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id >> 2
    }

    /// Suit, 0-3 for clubs, diamonds, hearts, spades.
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id & 3
    }

    /// Upper-case rank symbol.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Lower-case suit letter.
    pub fn suit_char(&self) -> char {
        SUITS[self.suit() as usize].0
    }

    #[inline]
    fn bit(&self) -> u64 {
        1 << self.id
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        match cards[..] {
            [card] => Ok(card),
            _ => Err(ParseError::CardCount { expected: 1, actual: cards.len() }),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The hero's (or a villain's) two private cards, higher rank first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HoleCards {
    cards: [Card; 2],
}

impl HoleCards {
    /// Hole cards from two cards in any order.
    pub fn new(a: Card, b: Card) -> Self {
        let cards = if b.rank() > a.rank() { [b, a] } else { [a, b] };
        Self { cards }
    }

    /// The higher-ranked card (either card of a pair).
    pub fn high(&self) -> Card {
        self.cards[0]
    }

    /// The lower-ranked card.
    pub fn low(&self) -> Card {
        self.cards[1]
    }

    /// Both cards, higher rank first.
    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    /// Same suit.
    pub fn is_suited(&self) -> bool {
        self.high().suit() == self.low().suit()
    }

    /// Same rank.
    pub fn is_pair(&self) -> bool {
        self.high().rank() == self.low().rank()
    }

    /// Canonical starting-hand code (`AKs`, `AKo`, `77`).
    pub fn hand_code(&self) -> HandCode {
        HandCode::from_cards(self.high(), self.low())
    }

    /// Whether `card` is one of the two.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl FromStr for HoleCards {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        match cards[..] {
            [a, b] => Ok(Self::new(a, b)),
            _ => Err(ParseError::CardCount { expected: 2, actual: cards.len() }),
        }
    }
}

impl TryFrom<String> for HoleCards {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HoleCards> for String {
    fn from(hole: HoleCards) -> Self {
        hole.to_string()
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high(), self.low())
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Community cards, at most five.
///
/// Any count up to five is representable; only 0, 3, 4 and 5 map to a
/// [`Street`]. A board built through serde skips the length check, so
/// consumers still check [`Board::street`].
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Preflop: no cards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board from a list of cards; more than five is an error.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, ParseError> {
        match cards.len() {
            0..=5 => Ok(Self { cards }),
            n => Err(ParseError::BoardTooLong(n)),
        }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// No cards yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards, in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal one more card onto the board.
    pub fn push(&mut self, card: Card) -> Result<(), ParseError> {
        if self.cards.len() == 5 {
            return Err(ParseError::BoardTooLong(6));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Whether `card` is on the board.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The street this board belongs to, `None` for 1, 2 or 6+ cards.
    pub fn street(&self) -> Option<Street> {
        Street::from_board_len(self.len())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).and_then(Self::from_cards)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cards.iter().try_for_each(|card| write!(f, "{}", card))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.cards).finish()
    }
}

/// Betting round, determined by the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// No community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    River,
}

impl Street {
    /// Street with exactly `len` board cards.
    pub fn from_board_len(len: usize) -> Option<Street> {
        Some(match len {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            5 => Street::River,
            _ => return None,
        })
    }

    /// Board cards on this street.
    pub fn board_len(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Lower-case name.
    pub fn label(&self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Live cards: everything not known to be held or on the board.
///
/// Cards are dealt from the back of the live slice.
#[derive(Clone)]
pub struct Deck {
    live: [Card; 52],
    len: usize,
}

impl Deck {
    /// All 52 cards.
    pub fn new() -> Self {
        Self::without(&[])
    }

    /// All cards except `dead`. A card listed twice is removed once.
    pub fn without(dead: &[Card]) -> Self {
        let dead_mask = dead.iter().fold(0u64, |mask, card| mask | card.bit());
        let mut live = [Card::from_id(0); 52];
        let mut len = 0;

        for card in (0..52).map(Card::from_id).filter(|c| dead_mask & c.bit() == 0) {
            live[len] = card;
            len += 1;
        }

        Self { live, len }
    }

    /// Shuffle the live cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.live[..self.len].shuffle(rng);
    }

    /// Take one card off the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.len = self.len.checked_sub(1)?;
        Some(self.live[self.len])
    }

    /// Number of live cards.
    pub fn remaining(&self) -> usize {
        self.len
    }

    /// The live cards.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.live[..self.len]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck").field("live", &self.len).finish()
    }
}
