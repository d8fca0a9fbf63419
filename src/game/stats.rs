//! Per-session statistics

use super::Round;
use rustc_hash::FxHashMap;

/// Won rounds and guess counts for the current session
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    pub rounds_won: usize,
    pub total_guesses: usize,
    pub best_round: Option<usize>,
    pub worst_round: Option<usize>,
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl SessionStats {
    /// Record a finished round; rounds that were not won are ignored
    pub fn record(&mut self, round: &Round) {
        if !round.is_won() {
            return;
        }

        let guesses = round.guess_count();
        self.rounds_won += 1;
        self.total_guesses += guesses;
        self.best_round = Some(self.best_round.map_or(guesses, |b| b.min(guesses)));
        self.worst_round = Some(self.worst_round.map_or(guesses, |w| w.max(guesses)));
        *self.guess_distribution.entry(guesses).or_insert(0) += 1;
    }

    /// Mean guesses per won round
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.rounds_won > 0).then(|| self.total_guesses as f64 / self.rounds_won as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;

    fn won_round(secret: &str, misses: &[&str]) -> Round {
        let mut round = Round::new(secret.parse().unwrap());
        for miss in misses {
            round.submit(Guess::new(miss).unwrap()).unwrap();
        }
        round.submit(Guess::new(secret).unwrap()).unwrap();
        round
    }

    #[test]
    fn empty_stats() {
        let stats = SessionStats::default();
        assert_eq!(stats.rounds_won, 0);
        assert_eq!(stats.average_guesses(), None);
        assert_eq!(stats.best_round, None);
    }

    #[test]
    fn records_won_rounds() {
        let mut stats = SessionStats::default();
        stats.record(&won_round("1234", &["5678", "4321"]));
        stats.record(&won_round("42", &[]));

        assert_eq!(stats.rounds_won, 2);
        assert_eq!(stats.total_guesses, 4);
        assert_eq!(stats.best_round, Some(1));
        assert_eq!(stats.worst_round, Some(3));
        assert_eq!(stats.average_guesses(), Some(2.0));

        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.rounds_won);
    }

    #[test]
    fn ignores_unfinished_rounds() {
        let mut stats = SessionStats::default();
        let mut round = Round::new("1234".parse().unwrap());
        round.submit(Guess::new("1111").unwrap()).unwrap();

        stats.record(&round);
        assert_eq!(stats.rounds_won, 0);
        assert!(stats.guess_distribution.is_empty());
    }
}
