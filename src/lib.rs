pub mod card;
pub mod config;
pub mod game;
pub mod rng;
pub mod simulation;
pub mod strategy;
