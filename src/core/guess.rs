//! Player guess parsing and validation

use super::DigitCount;
use std::fmt;
use thiserror::Error;

/// Why a line of player input is not a usable guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Not a whole number (empty, sign, letters, spaces between digits, ...)
    #[error("Invalid input {0} please enter a whole number")]
    NotANumber(String),
    /// Correct format but not the configured number of digits
    #[error("Guesses must have {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// A player's guess: a run of decimal digits
///
/// Unlike the secret, a guess may start with zero and may repeat digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    digits: Vec<u8>,
}

impl Guess {
    /// Parse a guess of any length
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `GuessError::NotANumber` if the input is empty or contains
    /// anything other than ASCII digits.
    pub fn new(input: &str) -> Result<Self, GuessError> {
        let text = input.trim();

        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GuessError::NotANumber(text.to_string()));
        }

        Ok(Self {
            text: text.to_string(),
            digits: text.bytes().map(|b| b - b'0').collect(),
        })
    }

    /// Parse a guess and check it has exactly `expected` digits
    ///
    /// # Errors
    /// Returns `GuessError::NotANumber` for malformed input, then
    /// `GuessError::WrongLength` if the digit count differs.
    ///
    /// # Examples
    /// ```
    /// use pico_fermi_bagel::core::{DigitCount, Guess, GuessError};
    ///
    /// let four = DigitCount::new(4).unwrap();
    /// assert_eq!(Guess::parse("0427", four).unwrap().text(), "0427");
    /// assert!(matches!(Guess::parse("12x4", four), Err(GuessError::NotANumber(_))));
    /// assert!(matches!(
    ///     Guess::parse("123", four),
    ///     Err(GuessError::WrongLength { expected: 4, actual: 3 })
    /// ));
    /// ```
    pub fn parse(input: &str, expected: DigitCount) -> Result<Self, GuessError> {
        let guess = Self::new(input)?;

        if guess.digits.len() != expected.get() {
            return Err(GuessError::WrongLength {
                expected: expected.get(),
                actual: guess.digits.len(),
            });
        }

        Ok(guess)
    }

    /// The guess as typed, without surrounding whitespace
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The guess digits, each in `0..=9`
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
