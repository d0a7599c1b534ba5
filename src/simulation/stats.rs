use crate::game::state::{Outcome, Phase};
use crate::simulation::engine::GameRecord;
use serde::Serialize;
use std::fmt;

/// Per-outcome counts for a batch of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub user_quit: u64,
    pub user_busted: u64,
    pub house_busted: u64,
    pub house_won: u64,
    pub user_won: u64,
}

impl OutcomeCounts {
    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::UserQuit => self.user_quit,
            Outcome::UserBusted => self.user_busted,
            Outcome::HouseBusted => self.house_busted,
            Outcome::HouseWon => self.house_won,
            Outcome::UserWon => self.user_won,
        }
    }

    fn slot(&mut self, outcome: Outcome) -> &mut u64 {
        match outcome {
            Outcome::UserQuit => &mut self.user_quit,
            Outcome::UserBusted => &mut self.user_busted,
            Outcome::HouseBusted => &mut self.house_busted,
            Outcome::HouseWon => &mut self.house_won,
            Outcome::UserWon => &mut self.user_won,
        }
    }
}

/// Aggregate results from many games with fixed strategies
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrialSummary {
    pub games: u64,
    pub outcomes: OutcomeCounts,
    /// Games won by the player: `user_won` plus `house_busted`
    pub player_wins: u64,
    /// Games that reached the final comparison
    pub resolved: u64,
    #[serde(skip)]
    player_tally_sum: u64,
    #[serde(skip)]
    house_tally_sum: u64,
}

impl TrialSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        *self.outcomes.slot(game.outcome) += 1;
        if game.outcome.is_player_win() {
            self.player_wins += 1;
        }
        if game.ended_in == Phase::Resolved {
            self.resolved += 1;
            self.player_tally_sum += game.player_tally as u64;
            self.house_tally_sum += game.house_tally as u64;
        }
    }

    /// Combine two partial summaries, e.g. from different threads
    pub fn merge(mut self, other: TrialSummary) -> TrialSummary {
        self.games += other.games;
        self.outcomes.user_quit += other.outcomes.user_quit;
        self.outcomes.user_busted += other.outcomes.user_busted;
        self.outcomes.house_busted += other.outcomes.house_busted;
        self.outcomes.house_won += other.outcomes.house_won;
        self.outcomes.user_won += other.outcomes.user_won;
        self.player_wins += other.player_wins;
        self.resolved += other.resolved;
        self.player_tally_sum += other.player_tally_sum;
        self.house_tally_sum += other.house_tally_sum;
        self
    }

    /// Fraction of games the player won, 0.0 for an empty batch
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.player_wins as f64 / self.games as f64
        }
    }

    /// Standard error of [`win_rate`](Self::win_rate)
    pub fn standard_error(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let p = self.win_rate();
        (p * (1.0 - p) / self.games as f64).sqrt()
    }

    pub fn fraction(&self, outcome: Outcome) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.outcomes.get(outcome) as f64 / self.games as f64
        }
    }

    /// Mean final player tally over games that reached the comparison
    pub fn avg_player_tally(&self) -> Option<f64> {
        (self.resolved > 0).then(|| self.player_tally_sum as f64 / self.resolved as f64)
    }

    /// Mean final house tally over games that reached the comparison
    pub fn avg_house_tally(&self) -> Option<f64> {
        (self.resolved > 0).then(|| self.house_tally_sum as f64 / self.resolved as f64)
    }
}

impl fmt::Display for TrialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Win rate: {:.2}% ± {:.2}% ({}/{})",
            self.win_rate() * 100.0,
            self.standard_error() * 100.0,
            self.player_wins,
            self.games
        )?;
        for outcome in Outcome::ALL {
            let pct = self.fraction(outcome) * 100.0;
            let bar = "█".repeat((pct / 2.0) as usize);
            writeln!(
                f,
                "  {:13} {:5.1}% {} ({})",
                outcome.as_str(),
                pct,
                bar,
                self.outcomes.get(outcome)
            )?;
        }
        if let (Some(p), Some(h)) = (self.avg_player_tally(), self.avg_house_tally()) {
            writeln!(f, "Average final tally when resolved: player {:.2}, house {:.2}", p, h)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn game(outcome: Outcome, ended_in: Phase, player_tally: u32, house_tally: u32) -> GameRecord {
        GameRecord {
            outcome,
            ended_in,
            player_up: Card::new(5).unwrap(),
            house_up: Card::new(5).unwrap(),
            player_tally,
            house_tally,
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = TrialSummary::new();
        assert_eq!(summary.games, 0);
        assert_eq!(summary.win_rate(), 0.0);
        assert_eq!(summary.standard_error(), 0.0);
        assert_eq!(summary.avg_player_tally(), None);
    }

    #[test]
    fn test_record_counts_player_wins() {
        let mut summary = TrialSummary::new();
        summary.record(&game(Outcome::UserWon, Phase::Resolved, 20, 18));
        summary.record(&game(Outcome::HouseBusted, Phase::HouseTurn, 17, 24));
        summary.record(&game(Outcome::HouseWon, Phase::Resolved, 18, 18));
        summary.record(&game(Outcome::UserQuit, Phase::PlayerTurn, 5, 5));

        assert_eq!(summary.games, 4);
        assert_eq!(summary.player_wins, 2);
        assert_eq!(summary.win_rate(), 0.5);
        assert_eq!(summary.outcomes.get(Outcome::UserQuit), 1);
        assert_eq!(summary.outcomes.get(Outcome::UserBusted), 0);
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.avg_player_tally(), Some(19.0));
        assert_eq!(summary.avg_house_tally(), Some(18.0));
    }

    #[test]
    fn test_merge_adds_everything() {
        let mut a = TrialSummary::new();
        a.record(&game(Outcome::UserWon, Phase::Resolved, 20, 18));
        let mut b = TrialSummary::new();
        b.record(&game(Outcome::UserBusted, Phase::PlayerTurn, 25, 7));
        b.record(&game(Outcome::HouseWon, Phase::Resolved, 16, 18));

        let merged = a.clone().merge(b.clone());
        assert_eq!(merged.games, 3);
        assert_eq!(merged.player_wins, 1);
        assert_eq!(merged.resolved, 2);
        assert_eq!(merged.avg_player_tally(), Some(18.0));
        assert_eq!(merged, b.merge(a));
    }

    #[test]
    fn test_display_lists_every_outcome() {
        let mut summary = TrialSummary::new();
        summary.record(&game(Outcome::UserWon, Phase::Resolved, 20, 18));
        let text = summary.to_string();
        for outcome in Outcome::ALL {
            assert!(text.contains(outcome.as_str()));
        }
        assert!(text.contains("Win rate: 100.00%"));
    }
}
