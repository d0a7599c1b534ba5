//! Textual strategy expressions, as used on the command line and in config files.
//!
//! ```text
//! louis
//! stop_at(17)
//! both(louis, stop_at(15))
//! always_draw
//! always_done
//! ```
//!
//! Names are case-insensitive and `-` may be used in place of `_`.

use crate::card::Card;
use crate::strategy::{always_done, always_draw, both, louis, stop_at, Action, Strategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Deepest `both(...)` nesting accepted by the parser
pub const MAX_NESTING: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyParseError {
    #[error("Unknown strategy '{0}'")]
    UnknownStrategy(String),
    #[error("Invalid stop_at limit '{0}'")]
    InvalidLimit(String),
    #[error("Malformed strategy at position {position}: {reason}")]
    Malformed { position: usize, reason: String },
}

/// A parsed strategy expression. Evaluates exactly like the strategy it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategySpec {
    Louis,
    StopAt(u32),
    AlwaysDraw,
    AlwaysDone,
    Both(Box<StrategySpec>, Box<StrategySpec>),
}

impl Strategy for StrategySpec {
    fn decide(&self, tally: u32, opponent_up: Card) -> Action {
        match self {
            StrategySpec::Louis => louis(tally, opponent_up),
            StrategySpec::StopAt(limit) => stop_at(*limit).decide(tally, opponent_up),
            StrategySpec::AlwaysDraw => always_draw().decide(tally, opponent_up),
            StrategySpec::AlwaysDone => always_done().decide(tally, opponent_up),
            StrategySpec::Both(first, second) => {
                both(first.as_ref(), second.as_ref()).decide(tally, opponent_up)
            }
        }
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySpec::Louis => write!(f, "louis"),
            StrategySpec::StopAt(limit) => write!(f, "stop_at({})", limit),
            StrategySpec::AlwaysDraw => write!(f, "always_draw"),
            StrategySpec::AlwaysDone => write!(f, "always_done"),
            StrategySpec::Both(a, b) => write!(f, "both({}, {})", a, b),
        }
    }
}

impl FromStr for StrategySpec {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            input: s,
            pos: 0,
            depth: 0,
        };
        let spec = parser.expr()?;
        parser.skip_ws();
        if parser.pos < s.len() {
            return Err(parser.malformed("unexpected trailing input"));
        }
        Ok(spec)
    }
}

impl TryFrom<String> for StrategySpec {
    type Error = StrategyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategySpec> for String {
    fn from(spec: StrategySpec) -> String {
        spec.to_string()
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn malformed(&self, reason: &str) -> StrategyParseError {
        StrategyParseError::Malformed {
            position: self.pos,
            reason: reason.to_string(),
        }
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), StrategyParseError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.malformed(&format!("expected '{}'", c)))
        }
    }

    /// Take a run of characters matching `pred`
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        self.skip_ws();
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn expr(&mut self) -> Result<StrategySpec, StrategyParseError> {
        let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if word.is_empty() {
            return Err(self.malformed("expected a strategy name"));
        }
        let name = word.to_ascii_lowercase().replace('-', "_");

        match name.as_str() {
            "louis" => Ok(StrategySpec::Louis),
            "always_draw" | "draw" => Ok(StrategySpec::AlwaysDraw),
            "always_done" | "done" => Ok(StrategySpec::AlwaysDone),
            "stop_at" => {
                self.expect('(')?;
                let digits = self.take_while(|c| !c.is_whitespace() && c != ')');
                let limit = digits
                    .parse::<u32>()
                    .map_err(|_| StrategyParseError::InvalidLimit(digits.to_string()))?;
                self.expect(')')?;
                Ok(StrategySpec::StopAt(limit))
            }
            "both" => {
                if self.depth >= MAX_NESTING {
                    return Err(self.malformed("nesting too deep"));
                }
                self.depth += 1;
                self.expect('(')?;
                let first = self.expr()?;
                self.expect(',')?;
                let second = self.expr()?;
                self.expect(')')?;
                self.depth -= 1;
                Ok(StrategySpec::Both(Box::new(first), Box::new(second)))
            }
            _ => Err(StrategyParseError::UnknownStrategy(word.to_string())),
        }
    }
}
