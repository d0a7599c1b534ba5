use crate::card::{Card, CardSource};
use crate::game::state::Party;
use crate::strategy::{Action, Strategy};

/// How one party's run of decisions ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// Strategy said done; tally is final
    Stopped,
    /// A draw pushed the tally over 21
    Busted,
    /// Strategy asked to abort the game
    Quit,
}

/// Play out one party's turn.
///
/// The strategy is asked with the party's tally and the opponent's up-card
/// until it stops, quits or a draw busts. It is never asked again after a
/// bust. `Retry` re-asks with unchanged state and draws nothing.
pub fn play_turn<S, C>(party: &mut Party<'_, S>, opponent_up: Card, cards: &mut C) -> TurnEnd
where
    S: Strategy + ?Sized,
    C: CardSource + ?Sized,
{
    loop {
        let action = party.strategy.decide(party.tally, opponent_up);
        log::trace!("tally {} vs {}: {}", party.tally, opponent_up, action);

        match action {
            Action::Draw => {
                let card = cards.draw();
                party.add_card(card);
                log::trace!("drew {} -> {}", card, party.tally);
                if party.is_bust() {
                    return TurnEnd::Busted;
                }
            }
            Action::Retry => continue,
            Action::Done => return TurnEnd::Stopped,
            Action::Quit => return TurnEnd::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardSequence;
    use crate::strategy::{always_done, always_draw, from_fn, stop_at};
    use std::cell::Cell;

    fn card(v: u32) -> Card {
        Card::new(v).unwrap()
    }

    fn cards(values: &[u32]) -> CardSequence {
        CardSequence::from_values(values).unwrap()
    }

    #[test]
    fn test_bust_stops_consulting_strategy() {
        let calls = Cell::new(0);
        let strategy = from_fn(|_, _| {
            calls.set(calls.get() + 1);
            Action::Draw
        });

        let mut party = Party::new(card(10), &strategy);
        party.add_card(card(5));
        assert_eq!(party.tally, 15);

        let mut source = cards(&[8]);
        let end = play_turn(&mut party, card(6), &mut source);

        assert_eq!(end, TurnEnd::Busted);
        assert_eq!(party.tally, 23);
        assert_eq!(calls.get(), 1, "strategy must not be asked after a bust");
        assert_eq!(source.drawn(), 1);
    }

    #[test]
    fn test_done_immediately_draws_nothing() {
        let strategy = always_done();
        let mut party = Party::new(card(4), &strategy);
        let mut source = cards(&[10]);

        assert_eq!(play_turn(&mut party, card(9), &mut source), TurnEnd::Stopped);
        assert_eq!(party.tally, 4);
        assert_eq!(source.drawn(), 0);
    }

    #[test]
    fn test_stop_at_accumulates_until_limit() {
        let strategy = stop_at(17);
        let mut party = Party::new(card(2), &strategy);
        let mut source = cards(&[3, 4, 5, 6]);

        assert_eq!(play_turn(&mut party, card(9), &mut source), TurnEnd::Stopped);
        assert_eq!(party.tally, 2 + 3 + 4 + 5 + 6);
        assert_eq!(source.drawn(), 4);
    }

    #[test]
    fn test_exactly_21_is_not_a_bust() {
        let strategy = stop_at(21);
        let mut party = Party::new(card(10), &strategy);
        let mut source = cards(&[10, 1]);

        assert_eq!(play_turn(&mut party, card(2), &mut source), TurnEnd::Stopped);
        assert_eq!(party.tally, 21);
    }

    #[test]
    fn test_always_draw_busts_eventually() {
        let strategy = always_draw();
        let mut party = Party::new(card(1), &strategy);
        let mut source = cards(&[1]);

        assert_eq!(play_turn(&mut party, card(2), &mut source), TurnEnd::Busted);
        assert_eq!(party.tally, 22);
        assert_eq!(source.drawn(), 21);
    }

    #[test]
    fn test_retry_reasks_without_drawing() {
        let calls = Cell::new(0);
        let seen = Cell::new((0, 0));
        let strategy = from_fn(|tally, up: Card| {
            calls.set(calls.get() + 1);
            seen.set((tally, up.value()));
            if calls.get() < 4 {
                Action::Retry
            } else {
                Action::Done
            }
        });

        let mut party = Party::new(card(9), &strategy);
        let mut source = cards(&[5]);

        assert_eq!(play_turn(&mut party, card(3), &mut source), TurnEnd::Stopped);
        assert_eq!(calls.get(), 4);
        assert_eq!(seen.get(), (9, 3));
        assert_eq!(source.drawn(), 0);
    }

    #[test]
    fn test_quit_ends_turn() {
        let strategy = from_fn(|tally, _| if tally < 10 { Action::Draw } else { Action::Quit });
        let mut party = Party::new(card(8), &strategy);
        let mut source = cards(&[7]);

        assert_eq!(play_turn(&mut party, card(3), &mut source), TurnEnd::Quit);
        assert_eq!(party.tally, 15);
    }

    #[test]
    fn test_opponent_up_card_is_passed_unchanged() {
        let strategy = from_fn(|tally, up: Card| {
            assert_eq!(up.value(), 6);
            if tally < 15 { Action::Draw } else { Action::Done }
        });
        let mut party = Party::new(card(2), &strategy);
        let mut source = cards(&[4, 9, 1]);

        assert_eq!(play_turn(&mut party, card(6), &mut source), TurnEnd::Stopped);
    }
}
