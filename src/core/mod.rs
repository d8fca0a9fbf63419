//! Core domain types for Pico-Fermi-Bagel
//!
//! Secret generation, guess validation and digit-by-digit scoring. Everything
//! here is pure: randomness is injected and no I/O happens below this module.

mod guess;
mod secret;
mod verdict;

pub use guess::{Guess, GuessError};
pub use secret::{DigitCount, Secret, SecretError, generate};
pub use verdict::{Feedback, Verdict};
