use crate::card::Card;
use crate::strategy::{Action, Strategy};

/// Draws only when both strategies want to draw.
///
/// `first` is asked first. Anything other than a draw from it (including
/// quit and retry) becomes `Done` and `second` is never asked. When `first`
/// draws, whatever `second` returns is the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Both<A, B> {
    pub first: A,
    pub second: B,
}

pub fn both<A: Strategy, B: Strategy>(first: A, second: B) -> Both<A, B> {
    Both { first, second }
}

impl<A: Strategy, B: Strategy> Strategy for Both<A, B> {
    fn decide(&self, tally: u32, opponent_up: Card) -> Action {
        match self.first.decide(tally, opponent_up) {
            Action::Draw => self.second.decide(tally, opponent_up),
            _ => Action::Done,
        }
    }
}
