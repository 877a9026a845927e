//! Production Environment implementation.
//!
//! `ConsoleEnv` draws challenges from the OS RNG, or from a seeded ChaCha
//! generator when the player asks for a repeatable sequence of challenges.

use std::sync::{Arc, Mutex, PoisonError};

use morse_core::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Challenge randomness for the console trainer.
#[derive(Clone)]
pub enum ConsoleEnv {
    /// OS randomness via getrandom. Not reproducible.
    System,
    /// Seeded generator, shared between clones.
    Seeded(Arc<Mutex<ChaCha8Rng>>),
}

impl ConsoleEnv {
    /// OS-backed environment, or a seeded one if `seed` is given.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed)))),
            None => Self::System,
        }
    }
}

impl Environment for ConsoleEnv {
    /// # Panics
    ///
    /// Panics if the OS RNG fails. This indicates OS-level breakage; there is
    /// no sensible fallback source of entropy.
    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        match self {
            Self::System => {
                getrandom::fill(buffer).expect("invariant: OS RNG failure is unrecoverable");
            },
            Self::Seeded(rng) => {
                rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
            },
        }
    }
}
