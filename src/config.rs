use crate::card::Card;
use crate::game::BUST_LIMIT;
use crate::strategy::{Action, Strategy, StrategySpec};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn default_player() -> StrategySpec {
    StrategySpec::Louis
}

fn default_house() -> StrategySpec {
    StrategySpec::StopAt(17)
}

fn default_trials() -> u32 {
    1000
}

fn default_parallel() -> bool {
    true
}

/// Settings for a batch of games, loadable from JSON:
///
/// ```json
/// { "player": "both(louis, stop_at(15))", "house": "stop_at(17)", "trials": 50000, "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    #[serde(default = "default_player")]
    pub player: StrategySpec,
    #[serde(default = "default_house")]
    pub house: StrategySpec,
    #[serde(default = "default_trials")]
    pub trials: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            player: default_player(),
            house: default_house(),
            trials: default_trials(),
            seed: None,
            parallel: default_parallel(),
        }
    }
}

impl SimulationConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(content)?;
        if never_stands(&config.player) {
            log::warn!("player strategy {} never stands and busts every game", config.player);
        }
        Ok(config)
    }
}

/// True if the strategy draws at every legal tally against every up-card
fn never_stands<S: Strategy + ?Sized>(strategy: &S) -> bool {
    (1..=BUST_LIMIT).all(|tally| Card::all().all(|up| strategy.decide(tally, up) == Action::Draw))
}
