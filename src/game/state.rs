use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Totals above this bust
pub const BUST_LIMIT: u32 = 21;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    HouseTurn,
    Resolved,
}

/// One side of the table for the duration of a game
pub struct Party<'s, S: ?Sized> {
    /// Sum of every card drawn so far, up-card included
    pub tally: u32,
    /// First card, fixed for the whole game and shown to the opponent
    pub up_card: Card,
    pub strategy: &'s S,
}

impl<'s, S: ?Sized> Party<'s, S> {
    /// Start a party from its up-card, which also seeds the tally
    pub fn new(up_card: Card, strategy: &'s S) -> Self {
        Party {
            tally: up_card.value(),
            up_card,
            strategy,
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.tally += card.value();
    }

    pub fn is_bust(&self) -> bool {
        self.tally > BUST_LIMIT
    }
}

/// Final result of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    UserQuit,
    UserBusted,
    HouseBusted,
    HouseWon,
    UserWon,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::UserQuit,
        Outcome::UserBusted,
        Outcome::HouseBusted,
        Outcome::HouseWon,
        Outcome::UserWon,
    ];

    /// Whether this counts as a win for the player in trial statistics
    pub fn is_player_win(self) -> bool {
        matches!(self, Outcome::UserWon | Outcome::HouseBusted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::UserQuit => "user_quit",
            Outcome::UserBusted => "user_busted",
            Outcome::HouseBusted => "house_busted",
            Outcome::HouseWon => "house_won",
            Outcome::UserWon => "user_won",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Louis;

    #[test]
    fn test_party_tally_starts_at_up_card() {
        let up = Card::new(7).unwrap();
        let party = Party::new(up, &Louis);
        assert_eq!(party.tally, 7);
        assert_eq!(party.up_card, up);
    }

    #[test]
    fn test_party_add_card_and_bust() {
        let mut party = Party::new(Card::new(10).unwrap(), &Louis);
        party.add_card(Card::new(10).unwrap());
        assert_eq!(party.tally, 20);
        assert!(!party.is_bust());
        party.add_card(Card::new(1).unwrap());
        assert!(!party.is_bust(), "21 is not a bust");
        party.add_card(Card::new(1).unwrap());
        assert!(party.is_bust());
        assert_eq!(party.up_card.value(), 10, "up-card never changes");
    }

    #[test]
    fn test_player_wins() {
        let wins: Vec<Outcome> = Outcome::ALL.into_iter().filter(|o| o.is_player_win()).collect();
        assert_eq!(wins, vec![Outcome::HouseBusted, Outcome::UserWon]);
    }

    #[test]
    fn test_outcome_names() {
        assert_eq!(Outcome::UserQuit.to_string(), "user_quit");
        assert_eq!(serde_json::to_string(&Outcome::HouseBusted).unwrap(), "\"house_busted\"");
    }
}
