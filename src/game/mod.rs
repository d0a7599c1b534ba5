pub mod state;
pub mod turns;

pub use state::{Outcome, Party, Phase, BUST_LIMIT};
pub use turns::{play_turn, TurnEnd};
