//! Environment abstraction for deterministic testing.
//!
//! Decouples challenge selection from the system's entropy source. Production
//! uses OS randomness; the simulation harness uses a seeded generator so a
//! whole game can be replayed.

/// Source of randomness for the trainer.
///
/// # Invariants
///
/// - Given the same seed, a simulation environment produces the same bytes.
/// - `random_bytes()` fills the entire buffer.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Uniformly distributed index in `[0, bound)`.
    ///
    /// Uses rejection sampling so small bounds carry no modulo bias. Returns
    /// 0 when `bound` is 0.
    fn random_index(&self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        let limit = u64::MAX - u64::MAX % bound;
        loop {
            let value = self.random_u64();
            if value < limit {
                return (value % bound) as usize;
            }
        }
    }
}
