//! Pico-Fermi-Bagel
//!
//! The number guessing game: the computer picks a secret N-digit number and
//! scores every guess digit by digit as Fermi (right place), Pico (wrong
//! place) or Bagel (not in the number).
//!
//! # Quick Start
//!
//! ```rust
//! use pico_fermi_bagel::core::{DigitCount, Feedback, Guess, Secret};
//!
//! let secret: Secret = "1234".parse().unwrap();
//! let guess = Guess::parse("4278", DigitCount::new(4).unwrap()).unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! assert_eq!(feedback.to_string(), "P F B B");
//! assert!(feedback.is_round_over());
//! ```

// Core domain types
pub mod core;

// Secret sources
pub mod generator;

// Round and session state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Log subscriber setup
pub mod logging;
