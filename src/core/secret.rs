//! The computer's secret number
//!
//! A Secret stores the generated number along with the set of digits it
//! contains, used for Pico lookups during scoring.

use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while configuring or constructing a secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error(
        "Number of digits must be between {min} and {max}, got {0}",
        min = DigitCount::MIN,
        max = DigitCount::MAX
    )]
    DigitCountOutOfRange(usize),
    #[error("Invalid input {0} please enter a whole number")]
    InvalidDigitCount(String),
    #[error("Secret must be digits only with no leading zero, got {0:?}")]
    InvalidSecret(String),
}

/// Number of digits in a round's secret and guesses
///
/// Always within `MIN..=MAX`, so the digit range `10^(n-1)..=10^n - 1` is
/// well defined and fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitCount(u8);

impl DigitCount {
    /// Smallest playable width
    pub const MIN: usize = 1;
    /// Largest width whose upper bound fits in a `u64`
    pub const MAX: usize = 19;
    /// Width used when none is configured
    pub const DEFAULT: Self = Self(4);

    /// Create a digit count
    ///
    /// # Errors
    /// Returns `SecretError::DigitCountOutOfRange` for 0 or anything above `MAX`.
    ///
    /// # Examples
    /// ```
    /// use pico_fermi_bagel::core::DigitCount;
    ///
    /// assert_eq!(DigitCount::new(5).unwrap().get(), 5);
    /// assert!(DigitCount::new(0).is_err());
    /// ```
    pub fn new(digits: usize) -> Result<Self, SecretError> {
        if (Self::MIN..=Self::MAX).contains(&digits) {
            Ok(Self(digits as u8))
        } else {
            Err(SecretError::DigitCountOutOfRange(digits))
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Inclusive value range `(10^(n-1), 10^n - 1)` for this width
    #[must_use]
    pub const fn bounds(self) -> (u64, u64) {
        let lower = 10u64.pow(self.0 as u32 - 1);
        (lower, lower * 10 - 1)
    }
}

impl Default for DigitCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for DigitCount {
    type Err = SecretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits: usize = trimmed
            .parse()
            .map_err(|_| SecretError::InvalidDigitCount(trimmed.to_string()))?;
        Self::new(digits)
    }
}

impl fmt::Display for DigitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A secret number: exactly `n` decimal digits, first digit non-zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    value: u64,
    digits: Vec<u8>,
    digit_set: FxHashSet<u8>,
}

impl Secret {
    /// Build a secret from a value already known to be in range
    fn from_value(value: u64) -> Self {
        let digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();

        let digit_set = digits.iter().copied().collect();

        Self {
            value,
            digits,
            digit_set,
        }
    }

    /// The secret as an integer
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// The secret's digits, most significant first, each in `0..=9`
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits in the secret
    #[inline]
    #[must_use]
    pub fn digit_count(&self) -> DigitCount {
        DigitCount(self.digits.len() as u8)
    }

    /// Check whether a digit occurs anywhere in the secret
    #[inline]
    #[must_use]
    pub fn has_digit(&self, digit: u8) -> bool {
        self.digit_set.contains(&digit)
    }
}

impl FromStr for Secret {
    type Err = SecretError;

    /// Parse a secret such as `"1234"`
    ///
    /// Rejects empty input, non-digit characters, a leading zero, and widths
    /// outside `DigitCount::MIN..=DigitCount::MAX`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || SecretError::InvalidSecret(trimmed.to_string());

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if trimmed.starts_with('0') {
            return Err(invalid());
        }
        DigitCount::new(trimmed.len())?;

        let value = trimmed.parse().map_err(|_| invalid())?;
        Ok(Self::from_value(value))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Generate a uniformly random secret with exactly `digits` digits
///
/// The value is drawn from `10^(n-1)..=10^n - 1`, so it never has a leading
/// zero.
///
/// # Examples
/// ```
/// use pico_fermi_bagel::core::{DigitCount, generate};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate(DigitCount::new(4).unwrap(), &mut rng);
/// assert!((1000..=9999).contains(&secret.value()));
/// ```
pub fn generate<R: Rng + ?Sized>(digits: DigitCount, rng: &mut R) -> Secret {
    let (lower, upper) = digits.bounds();
    let secret = Secret::from_value(rng.random_range(lower..=upper));
    tracing::trace!(secret = secret.value, digits = digits.get(), "generated secret");
    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn digit_count_bounds() {
        assert_eq!(DigitCount::new(1).unwrap().bounds(), (1, 9));
        assert_eq!(DigitCount::new(4).unwrap().bounds(), (1000, 9999));
        assert_eq!(
            DigitCount::new(19).unwrap().bounds(),
            (1_000_000_000_000_000_000, 9_999_999_999_999_999_999)
        );
    }

    #[test]
    fn digit_count_out_of_range() {
        assert_eq!(
            DigitCount::new(0),
            Err(SecretError::DigitCountOutOfRange(0))
        );
        assert_eq!(
            DigitCount::new(20),
            Err(SecretError::DigitCountOutOfRange(20))
        );
    }

    #[test]
    fn digit_count_from_str() {
        assert_eq!("5".parse::<DigitCount>().unwrap().get(), 5);
        assert_eq!(" 3\n".parse::<DigitCount>().unwrap().get(), 3);
        assert!(matches!(
            "five".parse::<DigitCount>(),
            Err(SecretError::InvalidDigitCount(_))
        ));
        assert!(matches!(
            "-2".parse::<DigitCount>(),
            Err(SecretError::InvalidDigitCount(_))
        ));
        assert_eq!(
            "0".parse::<DigitCount>(),
            Err(SecretError::DigitCountOutOfRange(0))
        );
    }

    #[test]
    fn digit_count_default_is_four() {
        assert_eq!(DigitCount::default().get(), 4);
    }

    #[test]
    fn generate_stays_in_range_for_every_width() {
        let mut rng = StdRng::seed_from_u64(42);

        for n in DigitCount::MIN..=DigitCount::MAX {
            let digits = DigitCount::new(n).unwrap();
            let (lower, upper) = digits.bounds();

            for _ in 0..200 {
                let secret = generate(digits, &mut rng);
                assert!(
                    (lower..=upper).contains(&secret.value()),
                    "{} outside {lower}..={upper}",
                    secret.value()
                );
                assert_eq!(secret.digits().len(), n);
                assert_ne!(secret.digits()[0], 0, "leading zero in {secret}");
            }
        }
    }

    #[test]
    fn generate_single_digit_covers_one_to_nine() {
        let mut rng = StdRng::seed_from_u64(1);
        let digits = DigitCount::new(1).unwrap();

        let mut seen = [false; 10];
        for _ in 0..500 {
            seen[generate(digits, &mut rng).value() as usize] = true;
        }

        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn generate_is_reproducible_with_seed() {
        let digits = DigitCount::new(6).unwrap();
        let a = generate(digits, &mut StdRng::seed_from_u64(99));
        let b = generate(digits, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn secret_from_str_valid() {
        let secret: Secret = "1231".parse().unwrap();
        assert_eq!(secret.value(), 1231);
        assert_eq!(secret.digits(), &[1, 2, 3, 1]);
        assert_eq!(secret.digit_count().get(), 4);
        assert_eq!(secret.to_string(), "1231");
    }

    #[test]
    fn secret_from_str_invalid() {
        assert!("".parse::<Secret>().is_err());
        assert!("0123".parse::<Secret>().is_err()); // Leading zero
        assert!("12a4".parse::<Secret>().is_err());
        assert!("-123".parse::<Secret>().is_err());
        assert_eq!(
            "12345678901234567890".parse::<Secret>(),
            Err(SecretError::DigitCountOutOfRange(20))
        );
    }

    #[test]
    fn secret_has_digit_with_duplicates() {
        let secret: Secret = "1231".parse().unwrap();
        assert!(secret.has_digit(1));
        assert!(secret.has_digit(2));
        assert!(secret.has_digit(3));
        assert!(!secret.has_digit(9));
        assert!(!secret.has_digit(0));
    }
}
