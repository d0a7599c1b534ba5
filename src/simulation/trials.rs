use crate::card::CardSource;
use crate::rng::GameRng;
use crate::simulation::engine::{play_game_record, GameRecord};
use crate::simulation::stats::TrialSummary;
use crate::strategy::Strategy;
use rayon::prelude::*;

/// Play `count` games with fixed strategies and return how many the player won.
///
/// A player win is `user_won` or `house_busted`. Every game is played; quits
/// count as losses. Zero games is fine and returns zero.
pub fn run_trials<P, H, C>(player: &P, house: &H, count: u32, cards: &mut C) -> u32
where
    P: Strategy + ?Sized,
    H: Strategy + ?Sized,
    C: CardSource + ?Sized,
{
    let mut wins = 0;
    for _ in 0..count {
        if play_game_record(house, player, cards).outcome.is_player_win() {
            wins += 1;
        }
    }
    wins
}

/// Like [`run_trials`], keeping the full outcome breakdown
pub fn summarize_trials<P, H, C>(player: &P, house: &H, count: u32, cards: &mut C) -> TrialSummary
where
    P: Strategy + ?Sized,
    H: Strategy + ?Sized,
    C: CardSource + ?Sized,
{
    let mut summary = TrialSummary::new();
    for _ in 0..count {
        summary.record(&play_game_record(house, player, cards));
    }
    log::info!(
        "{} games: {} player wins ({:.2}%)",
        summary.games,
        summary.player_wins,
        summary.win_rate() * 100.0
    );
    summary
}

/// Seed for game `index` of a batch started from `base_seed`
pub fn game_seed(base_seed: u64, index: u32) -> u64 {
    base_seed.wrapping_add(index as u64)
}

/// Sequential batch where game `i` gets its own stream seeded with
/// `base_seed + i`. Produces the same summary as
/// [`summarize_trials_parallel`] for the same arguments.
pub fn summarize_trials_seeded<P, H>(
    player: &P,
    house: &H,
    count: u32,
    base_seed: u64,
) -> TrialSummary
where
    P: Strategy + ?Sized,
    H: Strategy + ?Sized,
{
    let mut summary = TrialSummary::new();
    for i in 0..count {
        let mut rng = GameRng::new(Some(game_seed(base_seed, i)));
        summary.record(&play_game_record(house, player, &mut rng));
    }
    log::info!(
        "{} games (base seed {}): {} player wins ({:.2}%)",
        summary.games,
        base_seed,
        summary.player_wins,
        summary.win_rate() * 100.0
    );
    summary
}

/// Run the batch across the rayon thread pool
pub fn summarize_trials_parallel<P, H>(
    player: &P,
    house: &H,
    count: u32,
    base_seed: u64,
) -> TrialSummary
where
    P: Strategy + Sync + ?Sized,
    H: Strategy + Sync + ?Sized,
{
    summarize_trials_parallel_with(player, house, count, base_seed, |_| {})
}

/// Parallel batch that calls `on_game` after every finished game (progress bars)
pub fn summarize_trials_parallel_with<P, H, F>(
    player: &P,
    house: &H,
    count: u32,
    base_seed: u64,
    on_game: F,
) -> TrialSummary
where
    P: Strategy + Sync + ?Sized,
    H: Strategy + Sync + ?Sized,
    F: Fn(&GameRecord) + Sync,
{
    let summary = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = GameRng::new(Some(game_seed(base_seed, i)));
            let game = play_game_record(house, player, &mut rng);
            on_game(&game);
            game
        })
        .fold(TrialSummary::new, |mut summary, game| {
            summary.record(&game);
            summary
        })
        .reduce(TrialSummary::new, TrialSummary::merge);

    log::info!(
        "{} games (base seed {}): {} player wins ({:.2}%)",
        summary.games,
        base_seed,
        summary.player_wins,
        summary.win_rate() * 100.0
    );
    summary
}
