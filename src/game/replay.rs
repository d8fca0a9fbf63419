//! "Play again?" answers

use std::str::FromStr;
use thiserror::Error;

/// Answers accepted as "play again"
pub const YES_ANSWERS: [&str; 4] = ["Yes", "yes", "y", "Y"];

/// Answers accepted as "stop playing"
pub const NO_ANSWERS: [&str; 4] = ["No", "no", "n", "N"];

/// What happens after a won round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayDecision {
    /// Start another round
    Continue,
    /// End the session
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("Not a valid entry: {0:?}")]
    Unrecognized(String),
}

impl FromStr for ReplayDecision {
    type Err = ReplayError;

    /// Only the exact spellings in `YES_ANSWERS` and `NO_ANSWERS` are
    /// recognized; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let answer = s.trim();

        if YES_ANSWERS.contains(&answer) {
            Ok(Self::Continue)
        } else if NO_ANSWERS.contains(&answer) {
            Ok(Self::Stop)
        } else {
            Err(ReplayError::Unrecognized(answer.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_variants_continue() {
        for answer in YES_ANSWERS {
            assert_eq!(answer.parse::<ReplayDecision>(), Ok(ReplayDecision::Continue));
        }
        assert_eq!(" y\n".parse::<ReplayDecision>(), Ok(ReplayDecision::Continue));
    }

    #[test]
    fn no_variants_stop() {
        for answer in NO_ANSWERS {
            assert_eq!(answer.parse::<ReplayDecision>(), Ok(ReplayDecision::Stop));
        }
    }

    #[test]
    fn anything_else_is_unrecognized() {
        for answer in ["", "YES", "nope", "maybe", "yes please", "0"] {
            assert_eq!(
                answer.parse::<ReplayDecision>(),
                Err(ReplayError::Unrecognized(answer.to_string())),
                "{answer:?} should not be accepted"
            );
        }
    }
}
