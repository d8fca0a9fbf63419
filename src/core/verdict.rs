//! Guess scoring: Fermi, Pico and Bagel feedback
//!
//! Each position of a guess gets one verdict:
//! - F = Fermi (right digit, right position)
//! - P = Pico (digit occurs in the secret, different position)
//! - B = Bagel (digit does not occur in the secret)
//!
//! Pico membership is checked against the secret's full digit sequence. Digits
//! already matched as Fermi elsewhere are not removed from the pool, so a
//! repeated guess digit can earn several Picos from a single occurrence. This
//! is the game's scoring contract, not Wordle-style multiset scoring.

use super::{Guess, Secret};
use std::fmt;
use std::str::FromStr;

/// Verdict for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Fermi,
    Pico,
    Bagel,
}

impl Verdict {
    /// Single-letter form: `F`, `P` or `B`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Fermi => 'F',
            Self::Pico => 'P',
            Self::Bagel => 'B',
        }
    }

    /// Parse a single letter, case-insensitive
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' | 'f' => Some(Self::Fermi),
            'P' | 'p' => Some(Self::Pico),
            'B' | 'b' => Some(Self::Bagel),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Verdicts for a whole guess, in guess-position order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Both must have the same number of digits; callers validate this with
    /// `Guess::parse` before scoring.
    ///
    /// # Algorithm
    /// 1. Positions where the digits are equal are Fermi
    /// 2. Every other position is Pico if the guess digit appears anywhere in
    ///    the secret, otherwise Bagel
    ///
    /// # Examples
    /// ```
    /// use pico_fermi_bagel::core::{DigitCount, Feedback, Guess, Secret};
    ///
    /// let secret: Secret = "1234".parse().unwrap();
    /// let guess = Guess::parse("4278", DigitCount::new(4).unwrap()).unwrap();
    ///
    /// // 4(pico) 2(fermi) 7(bagel) 8(bagel)
    /// assert_eq!(Feedback::evaluate(&secret, &guess).to_string(), "P F B B");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Secret, guess: &Guess) -> Self {
        debug_assert_eq!(
            secret.digits().len(),
            guess.len(),
            "guess length must match the secret"
        );

        let verdicts = guess
            .digits()
            .iter()
            .zip(secret.digits())
            .map(|(&g, &s)| {
                if g == s {
                    Verdict::Fermi
                } else if secret.has_digit(g) {
                    Verdict::Pico
                } else {
                    Verdict::Bagel
                }
            })
            .collect();

        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every position is Fermi
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Fermi)
    }

    /// Whether the player must keep guessing
    ///
    /// `false` only when every verdict is Fermi.
    #[inline]
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        !self.is_solved()
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Compact form without separators, e.g. `"PFBB"`
    #[must_use]
    pub fn to_compact(&self) -> String {
        self.0.iter().map(|v| v.symbol()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse `"FPPF"`, `"f p p f"` and similar; whitespace and commas are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verdicts = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| Verdict::from_symbol(c).ok_or_else(|| format!("Invalid feedback string: {s}")))
            .collect::<Result<Vec<_>, _>>()?;

        if verdicts.is_empty() {
            return Err(format!("Invalid feedback string: {s}"));
        }

        Ok(Self(verdicts))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, verdict) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{verdict}")?;
        }
        Ok(())
    }
}
