use crate::card::{Card, CardSource};
use crate::game::state::{Outcome, Party, Phase};
use crate::game::turns::{play_turn, TurnEnd};
use crate::strategy::Strategy;
use serde::Serialize;

/// Result of a single game simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub outcome: Outcome,
    /// Phase the game was in when it ended
    #[serde(skip)]
    pub ended_in: Phase,
    pub player_up: Card,
    pub house_up: Card,
    pub player_tally: u32,
    /// Stays at the house up-card if the house never got to play
    pub house_tally: u32,
}

/// Play one full game and return its outcome.
///
/// Note the argument order: house strategy first, then player.
pub fn play_game<H, P, C>(house: &H, player: &P, cards: &mut C) -> Outcome
where
    H: Strategy + ?Sized,
    P: Strategy + ?Sized,
    C: CardSource + ?Sized,
{
    play_game_record(house, player, cards).outcome
}

/// Same as [`play_game`], keeping up-cards and final tallies
pub fn play_game_record<H, P, C>(house: &H, player: &P, cards: &mut C) -> GameRecord
where
    H: Strategy + ?Sized,
    P: Strategy + ?Sized,
    C: CardSource + ?Sized,
{
    let player_up = cards.draw();
    let house_up = cards.draw();
    let mut user = Party::new(player_up, player);
    let mut dealer = Party::new(house_up, house);

    let (outcome, ended_in) = match play_turn(&mut user, house_up, cards) {
        TurnEnd::Busted => (Outcome::UserBusted, Phase::PlayerTurn),
        TurnEnd::Quit => (Outcome::UserQuit, Phase::PlayerTurn),
        TurnEnd::Stopped => match play_turn(&mut dealer, player_up, cards) {
            TurnEnd::Busted => (Outcome::HouseBusted, Phase::HouseTurn),
            TurnEnd::Quit => (Outcome::UserQuit, Phase::HouseTurn),
            // House takes ties
            TurnEnd::Stopped if dealer.tally >= user.tally => (Outcome::HouseWon, Phase::Resolved),
            TurnEnd::Stopped => (Outcome::UserWon, Phase::Resolved),
        },
    };

    let game = GameRecord {
        outcome,
        ended_in,
        player_up,
        house_up,
        player_tally: user.tally,
        house_tally: dealer.tally,
    };

    log::debug!(
        "game over: {} (player {} from {}, house {} from {})",
        game.outcome,
        game.player_tally,
        game.player_up,
        game.house_tally,
        game.house_up
    );
    game
}
