pub mod engine;
pub mod stats;
pub mod trials;

pub use engine::{play_game, play_game_record, GameRecord};
pub use stats::{OutcomeCounts, TrialSummary};
pub use trials::{
    run_trials, summarize_trials, summarize_trials_parallel, summarize_trials_parallel_with,
    summarize_trials_seeded,
};
