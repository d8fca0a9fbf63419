//! Score command
//!
//! Scores a single guess against a known secret, without playing a round.

use crate::core::{Feedback, Guess, GuessError, Secret, SecretError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Invalid secret: {0}")]
    Secret(#[from] SecretError),
    #[error("Invalid guess: {0}")]
    Guess(#[from] GuessError),
}

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Secret,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid secret (non-digits, leading zero, too long)
/// - The guess is not a number or has a different number of digits
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, ScoreError> {
    let secret: Secret = secret.parse()?;
    let guess = Guess::parse(guess, secret.digit_count())?;
    let feedback = Feedback::evaluate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_rules_example() {
        let result = score_guess("1234", "4278").unwrap();
        assert_eq!(result.feedback.to_compact(), "PFBB");
        assert_eq!(result.secret.value(), 1234);
        assert_eq!(result.guess.text(), "4278");
    }

    #[test]
    fn scores_repeated_digit_case() {
        let result = score_guess("1231", "1111").unwrap();
        assert_eq!(result.feedback.to_compact(), "FPPF");
    }

    #[test]
    fn exact_match_is_solved() {
        assert!(score_guess("987", "987").unwrap().feedback.is_solved());
    }

    #[test]
    fn invalid_secret_rejected() {
        assert!(matches!(
            score_guess("0123", "1234"),
            Err(ScoreError::Secret(_))
        ));
        assert!(matches!(
            score_guess("12ab", "1234"),
            Err(ScoreError::Secret(_))
        ));
    }

    #[test]
    fn invalid_guess_rejected() {
        assert!(matches!(
            score_guess("1234", "12"),
            Err(ScoreError::Guess(GuessError::WrongLength {
                expected: 4,
                actual: 2
            }))
        ));
        assert!(matches!(
            score_guess("1234", "12x4"),
            Err(ScoreError::Guess(GuessError::NotANumber(_)))
        ));
    }
}
