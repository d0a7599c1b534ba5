use crate::card::Card;
use crate::strategy::{Action, Strategy};

/// Draw until the tally reaches `limit`, then stand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAt {
    pub limit: u32,
}

pub fn stop_at(limit: u32) -> StopAt {
    StopAt { limit }
}

impl Strategy for StopAt {
    fn decide(&self, tally: u32, _opponent_up: Card) -> Action {
        if tally >= self.limit {
            Action::Done
        } else {
            Action::Draw
        }
    }
}

/// Louis' heuristic. Rules are checked top to bottom; the first match wins.
///
/// - under 12: draw
/// - over 16: done
/// - exactly 12: draw only against a 1, 2 or 3
/// - exactly 16: done only against a 10
/// - anything else: draw against 7 or higher, otherwise done
pub fn louis(tally: u32, opponent_up: Card) -> Action {
    let up = opponent_up.value();
    if tally < 12 {
        Action::Draw
    } else if tally > 16 {
        Action::Done
    } else if tally == 12 {
        if up < 4 {
            Action::Draw
        } else {
            Action::Done
        }
    } else if tally == 16 {
        if up == 10 {
            Action::Done
        } else {
            Action::Draw
        }
    } else if up > 6 {
        Action::Draw
    } else {
        Action::Done
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Louis;

impl Strategy for Louis {
    fn decide(&self, tally: u32, opponent_up: Card) -> Action {
        louis(tally, opponent_up)
    }
}

/// Always asks for another card. Only a bust ends its turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysDraw;

pub fn always_draw() -> AlwaysDraw {
    AlwaysDraw
}

impl Strategy for AlwaysDraw {
    fn decide(&self, _tally: u32, _opponent_up: Card) -> Action {
        Action::Draw
    }
}

/// Stands on the up-card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysDone;

pub fn always_done() -> AlwaysDone {
    AlwaysDone
}

impl Strategy for AlwaysDone {
    fn decide(&self, _tally: u32, _opponent_up: Card) -> Action {
        Action::Done
    }
}
