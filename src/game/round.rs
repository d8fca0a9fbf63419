//! A single round: one secret, guesses until all Fermi

use crate::core::{DigitCount, Feedback, Guess, Secret};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("Guess has {actual} digits but the secret has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Round is already won")]
    AlreadyWon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Guessing,
    Won,
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Round state machine
///
/// Starts in `Guessing`; the first all-Fermi feedback moves it to `Won`, after
/// which no more guesses are accepted.
#[derive(Debug, Clone)]
pub struct Round {
    secret: Secret,
    turns: Vec<Turn>,
    state: RoundState,
}

impl Round {
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        debug!(digits = secret.digit_count().get(), "round started");
        Self {
            secret,
            turns: Vec::new(),
            state: RoundState::Guessing,
        }
    }

    /// Score a guess and advance the state
    ///
    /// # Errors
    /// Returns `RoundError::AlreadyWon` after the round is over and
    /// `RoundError::LengthMismatch` if the guess width differs from the secret.
    pub fn submit(&mut self, guess: Guess) -> Result<&Turn, RoundError> {
        if self.state == RoundState::Won {
            return Err(RoundError::AlreadyWon);
        }

        let expected = self.secret.digit_count().get();
        if guess.len() != expected {
            return Err(RoundError::LengthMismatch {
                expected,
                actual: guess.len(),
            });
        }

        let feedback = Feedback::evaluate(&self.secret, &guess);
        debug!(turn = self.turns.len() + 1, guess = %guess, feedback = %feedback, "scored guess");

        if !feedback.is_round_over() {
            self.state = RoundState::Won;
            info!(guesses = self.turns.len() + 1, "round won");
        }

        self.turns.push(Turn { guess, feedback });
        Ok(&self.turns[self.turns.len() - 1])
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> DigitCount {
        self.secret.digit_count()
    }

    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == RoundState::Won
    }

    /// Number of accepted guesses so far
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(secret: &str) -> Round {
        Round::new(secret.parse().unwrap())
    }

    fn guess(s: &str) -> Guess {
        Guess::new(s).unwrap()
    }

    #[test]
    fn new_round_is_guessing() {
        let r = round("1234");
        assert_eq!(r.state(), RoundState::Guessing);
        assert_eq!(r.guess_count(), 0);
        assert_eq!(r.digits().get(), 4);
    }

    #[test]
    fn wrong_guesses_keep_guessing() {
        let mut r = round("1234");

        let turn = r.submit(guess("4278")).unwrap();
        assert_eq!(turn.feedback.to_compact(), "PFBB");

        r.submit(guess("5678")).unwrap();
        assert_eq!(r.state(), RoundState::Guessing);
        assert_eq!(r.guess_count(), 2);
    }

    #[test]
    fn exact_guess_wins() {
        let mut r = round("1234");
        r.submit(guess("4321")).unwrap();

        let turn = r.submit(guess("1234")).unwrap();
        assert!(turn.feedback.is_solved());
        assert!(r.is_won());
        assert_eq!(r.guess_count(), 2);
        assert_eq!(r.turns()[0].guess.text(), "4321");
    }

    #[test]
    fn no_guesses_after_win() {
        let mut r = round("9");
        r.submit(guess("9")).unwrap();

        assert_eq!(r.submit(guess("9")), Err(RoundError::AlreadyWon));
        assert_eq!(r.guess_count(), 1);
    }

    #[test]
    fn length_mismatch_rejected_without_counting() {
        let mut r = round("1234");

        assert_eq!(
            r.submit(guess("123")),
            Err(RoundError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(r.guess_count(), 0);
        assert_eq!(r.state(), RoundState::Guessing);
    }
}
