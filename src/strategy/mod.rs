//! Decision strategies: given a tally and the opponent's up-card, pick an action.

pub mod builtin;
pub mod combinators;
pub mod expr;

use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use builtin::{
    always_done, always_draw, louis, stop_at, AlwaysDone, AlwaysDraw, Louis, StopAt,
};
pub use combinators::{both, Both};
pub use expr::{StrategyParseError, StrategySpec};

/// What a strategy wants to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Take another card
    Draw,
    /// Stand on the current tally
    Done,
    /// Abort the whole game
    Quit,
    /// Ask again with the same state
    Retry,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown action '{0}' (expected draw, done, quit or retry)")]
pub struct ActionParseError(pub String);

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draw" => Ok(Action::Draw),
            "done" => Ok(Action::Done),
            "quit" => Ok(Action::Quit),
            "retry" => Ok(Action::Retry),
            other => Err(ActionParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Draw => "draw",
            Action::Done => "done",
            Action::Quit => "quit",
            Action::Retry => "retry",
        };
        f.write_str(s)
    }
}

/// A decision function for one party.
///
/// `tally` is the party's current total and is never over 21 when this is
/// called. `opponent_up` is the opponent's first card, the only one visible.
pub trait Strategy {
    fn decide(&self, tally: u32, opponent_up: Card) -> Action;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn decide(&self, tally: u32, opponent_up: Card) -> Action {
        (**self).decide(tally, opponent_up)
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn decide(&self, tally: u32, opponent_up: Card) -> Action {
        (**self).decide(tally, opponent_up)
    }
}

/// Strategy backed by a plain function or closure, see [`from_fn`]
#[derive(Clone, Copy)]
pub struct FnStrategy<F>(F);

/// Turn any `Fn(tally, opponent_up) -> Action` into a [`Strategy`]
pub fn from_fn<F>(f: F) -> FnStrategy<F>
where
    F: Fn(u32, Card) -> Action,
{
    FnStrategy(f)
}

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(u32, Card) -> Action,
{
    fn decide(&self, tally: u32, opponent_up: Card) -> Action {
        (self.0)(tally, opponent_up)
    }
}
