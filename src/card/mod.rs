pub mod source;
pub mod types;

pub use source::{CardSequence, CardSource};
pub use types::{Card, CardError, MAX_CARD, MIN_CARD};
