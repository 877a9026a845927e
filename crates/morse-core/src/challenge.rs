//! Challenge selection.

use crate::{Environment, GLYPH_COUNT, Level, WORD_COUNT};

/// Picks the next target for a level.
///
/// Glyph levels draw uniformly from the glyph table, word levels from the
/// word table. No ordering is promised beyond what the environment yields.
#[derive(Debug, Clone)]
pub struct ChallengeGenerator<E> {
    env: E,
}

impl<E: Environment> ChallengeGenerator<E> {
    /// Create a generator drawing from `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Index of the next challenge for `level`. `None` while idle.
    pub fn next(&self, level: Level) -> Option<usize> {
        let bound = if level.is_word_level() {
            WORD_COUNT
        } else if level.is_started() {
            GLYPH_COUNT
        } else {
            return None;
        };
        Some(self.env.random_index(bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::testing::CountingEnv;

    #[test]
    fn idle_has_no_challenge() {
        let generator = ChallengeGenerator::new(CountingEnv::default());
        assert_eq!(generator.next(Level::Idle), None);
    }

    #[test]
    fn indices_stay_within_the_level_table() {
        let generator = ChallengeGenerator::new(CountingEnv::default());
        for _ in 0..50 {
            for level in [Level::Level1, Level::Level2] {
                assert!(generator.next(level).is_some_and(|i| i < GLYPH_COUNT));
            }
            for level in [Level::Level3, Level::Level4] {
                assert!(generator.next(level).is_some_and(|i| i < WORD_COUNT));
            }
        }
    }
}
