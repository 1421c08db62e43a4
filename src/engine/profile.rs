//! Opponent profile.
//!
//! Both axes are closed enums with a `Neutral` variant. Text that names no
//! known value parses to `Neutral` instead of failing, so a profile coming
//! from a form or a JSON file never blocks a recommendation.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How many hands the opponent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Style {
    /// Plays few hands; folds more often.
    Tight,
    /// Plays many hands; folds less often.
    Loose,
    /// No read.
    #[default]
    Neutral,
}

/// How the opponent puts chips in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Aggression {
    /// Calls and checks; gives up easily.
    Passive,
    /// Bets and raises; fights back.
    Aggressive,
    /// No read.
    #[default]
    Neutral,
}

impl Style {
    /// Lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Style::Tight => "tight",
            Style::Loose => "loose",
            Style::Neutral => "neutral",
        }
    }
}

impl Aggression {
    /// Lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Aggression::Passive => "passive",
            Aggression::Aggressive => "aggressive",
            Aggression::Neutral => "neutral",
        }
    }
}

impl From<&str> for Style {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "tight" | "nit" => Style::Tight,
            "loose" => Style::Loose,
            _ => Style::Neutral,
        }
    }
}

impl From<&str> for Aggression {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "passive" => Aggression::Passive,
            "aggressive" | "agg" => Aggression::Aggressive,
            _ => Aggression::Neutral,
        }
    }
}

impl From<String> for Style {
    fn from(s: String) -> Self {
        Style::from(s.as_str())
    }
}

impl From<String> for Aggression {
    fn from(s: String) -> Self {
        Aggression::from(s.as_str())
    }
}

impl FromStr for Style {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Style::from(s))
    }
}

impl FromStr for Aggression {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Aggression::from(s))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Aggression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read on the opponent, used for fold equity and bet sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentProfile {
    /// Hand-selection axis.
    pub style: Style,
    /// Betting axis.
    pub aggression: Aggression,
}

impl OpponentProfile {
    /// Create a profile from both axes.
    pub fn new(style: Style, aggression: Aggression) -> Self {
        Self { style, aggression }
    }

    /// Build a profile from free text, mapping anything unknown to neutral.
    pub fn parse_lenient(style: &str, aggression: &str) -> Self {
        Self {
            style: Style::from(style),
            aggression: Aggression::from(aggression),
        }
    }
}

impl fmt::Display for OpponentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.style, self.aggression)
    }
}
