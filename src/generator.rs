//! Secret sources
//!
//! Defines where each round's secret comes from. The game loop only sees the
//! `SecretSource` trait, so tests and scripted sessions can supply fixed
//! secrets while the binary draws them at random.

use crate::core::{DigitCount, Secret, generate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A supplier of secrets for new rounds
pub trait SecretSource {
    /// Produce the secret for the next round
    ///
    /// Returns `None` if this source cannot supply a secret of that width.
    fn next_secret(&mut self, digits: DigitCount) -> Option<Secret>;
}

/// Uniformly random secrets drawn from an injected RNG
pub struct RandomSecrets<R> {
    rng: R,
}

impl<R: Rng> RandomSecrets<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecrets<StdRng> {
    /// Seeded source for reproducible games, or OS-seeded when `seed` is `None`
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> SecretSource for RandomSecrets<R> {
    fn next_secret(&mut self, digits: DigitCount) -> Option<Secret> {
        Some(generate(digits, &mut self.rng))
    }
}

/// Predetermined secrets, handed out in order
///
/// A queued secret is only returned when its width matches the requested one.
#[derive(Debug, Default)]
pub struct FixedSecrets {
    queue: VecDeque<Secret>,
}

impl FixedSecrets {
    #[must_use]
    pub fn new(secrets: impl IntoIterator<Item = Secret>) -> Self {
        Self {
            queue: secrets.into_iter().collect(),
        }
    }

    /// Secrets not yet handed out
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl SecretSource for FixedSecrets {
    fn next_secret(&mut self, digits: DigitCount) -> Option<Secret> {
        if self.queue.front()?.digit_count() != digits {
            return None;
        }
        self.queue.pop_front()
    }
}
