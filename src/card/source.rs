use crate::card::types::{Card, CardError, MAX_CARD, MIN_CARD};
use crate::rng::GameRng;

/// Anything that can hand out cards during a game
pub trait CardSource {
    fn draw(&mut self) -> Card;
}

impl<C: CardSource + ?Sized> CardSource for &mut C {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}

/// Uniform, independent draws; there is no deck to run out of
impl CardSource for GameRng {
    fn draw(&mut self) -> Card {
        Card(self.random_inclusive(MIN_CARD, MAX_CARD))
    }
}

/// Replays a fixed list of cards, wrapping around at the end.
/// Used to set up exact game situations.
#[derive(Debug, Clone)]
pub struct CardSequence {
    cards: Vec<Card>,
    next: usize,
}

impl CardSequence {
    pub fn new(cards: Vec<Card>) -> Result<Self, CardError> {
        if cards.is_empty() {
            return Err(CardError::EmptySequence);
        }
        Ok(CardSequence { cards, next: 0 })
    }

    /// Build from raw values, rejecting anything outside 1..=10
    pub fn from_values(values: &[u32]) -> Result<Self, CardError> {
        let cards = values
            .iter()
            .map(|&v| Card::new(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }

    /// Number of cards handed out so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl CardSource for CardSequence {
    fn draw(&mut self) -> Card {
        let card = self.cards[self.next % self.cards.len()];
        self.next += 1;
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_draws_cover_range_uniformly() {
        let mut rng = GameRng::new(Some(7));
        let draws = 100_000;
        let mut counts = [0usize; 10];
        for _ in 0..draws {
            let card = rng.draw();
            counts[(card.value() - 1) as usize] += 1;
        }

        for (i, &count) in counts.iter().enumerate() {
            let freq = count as f64 / draws as f64;
            assert!(
                (freq - 0.1).abs() < 0.01,
                "Card {} frequency {:.4} too far from 0.1",
                i + 1,
                freq
            );
        }
    }

    #[test]
    fn test_sequence_replays_and_wraps() {
        let mut seq = CardSequence::from_values(&[3, 9]).unwrap();
        let drawn: Vec<u32> = (0..5).map(|_| seq.draw().value()).collect();
        assert_eq!(drawn, vec![3, 9, 3, 9, 3]);
        assert_eq!(seq.drawn(), 5);
    }

    #[test]
    fn test_sequence_empty_is_error() {
        assert_eq!(CardSequence::new(vec![]).unwrap_err(), CardError::EmptySequence);
        assert_eq!(CardSequence::from_values(&[]).unwrap_err(), CardError::EmptySequence);
    }

    #[test]
    fn test_sequence_rejects_bad_value() {
        assert_eq!(
            CardSequence::from_values(&[4, 11]).unwrap_err(),
            CardError::OutOfRange(11)
        );
    }
}
