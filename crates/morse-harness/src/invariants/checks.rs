//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use morse_core::{ANSWER_CAPACITY, GLYPH_COUNT, GOAL_TO_WIN, MAX_LIVES, SYMBOL_CAPACITY, WORD_COUNT};

use super::{GameSnapshot, Invariant, InvariantResult, Violation};

/// Lives stay within `1..=MAX_LIVES`.
///
/// Losing the last life returns to the menu in the same step, so zero lives
/// is never observable between events.
pub struct LivesBounded;

impl Invariant for LivesBounded {
    fn name(&self) -> &'static str {
        "lives_bounded"
    }

    fn check(&self, state: &GameSnapshot) -> InvariantResult {
        if (1..=MAX_LIVES).contains(&state.lives) {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("lives {} outside 1..={MAX_LIVES}", state.lives),
            })
        }
    }
}

/// The streak never reaches the goal between events.
///
/// Reaching the goal advances the level and resets the streak immediately.
pub struct StreakBounded;

impl Invariant for StreakBounded {
    fn name(&self) -> &'static str {
        "streak_bounded"
    }

    fn check(&self, state: &GameSnapshot) -> InvariantResult {
        if state.streak < GOAL_TO_WIN {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("streak {} reached goal {GOAL_TO_WIN}", state.streak),
            })
        }
    }
}

/// Idle means the menu: no challenge, full lives, cleared counters.
///
/// Conversely every started level has a challenge.
pub struct IdleIsMenu;

impl Invariant for IdleIsMenu {
    fn name(&self) -> &'static str {
        "idle_is_menu"
    }

    fn check(&self, state: &GameSnapshot) -> InvariantResult {
        let message = if state.level == 0 {
            if state.challenge.is_some() {
                Some(format!("idle with challenge {:?}", state.challenge))
            } else if state.lives != MAX_LIVES || state.streak != 0 {
                Some(format!("idle with lives {} streak {}", state.lives, state.streak))
            } else if state.total_correct != 0 || state.total_incorrect != 0 {
                Some(format!(
                    "idle with totals {}/{}",
                    state.total_correct, state.total_incorrect
                ))
            } else {
                None
            }
        } else if state.challenge.is_none() {
            Some(format!("level {} without a challenge", state.level))
        } else {
            None
        };

        match message {
            Some(message) => Err(Violation { invariant: self.name(), message }),
            None => Ok(()),
        }
    }
}

/// Challenge indices address the table for the level.
pub struct ChallengeInRange;

impl Invariant for ChallengeInRange {
    fn name(&self) -> &'static str {
        "challenge_in_range"
    }

    fn check(&self, state: &GameSnapshot) -> InvariantResult {
        let Some(challenge) = state.challenge else {
            return Ok(());
        };
        let bound = if state.word_level { WORD_COUNT } else { GLYPH_COUNT };

        if challenge < bound {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("level {} challenge {challenge} >= {bound}", state.level),
            })
        }
    }
}

/// Input buffers never exceed their capacity.
pub struct BuffersBounded;

impl Invariant for BuffersBounded {
    fn name(&self) -> &'static str {
        "buffers_bounded"
    }

    fn check(&self, state: &GameSnapshot) -> InvariantResult {
        if state.pending_symbols >= SYMBOL_CAPACITY {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{} pending symbols", state.pending_symbols),
            });
        }
        if state.answer_len >= ANSWER_CAPACITY {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{} answer glyphs", state.answer_len),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use morse_core::{GameState, Level};

    use super::*;

    fn playing() -> GameSnapshot {
        GameSnapshot::from_state(&GameState::playing(Level::Level2, 2, 1))
    }

    #[test]
    fn lives_bounded_rejects_zero() {
        let snapshot = GameSnapshot { lives: 0, ..playing() };
        assert!(LivesBounded.check(&snapshot).is_err());
        assert!(LivesBounded.check(&playing()).is_ok());
    }

    #[test]
    fn streak_bounded_rejects_goal() {
        let snapshot = GameSnapshot { streak: GOAL_TO_WIN, ..playing() };
        assert!(StreakBounded.check(&snapshot).is_err());
    }

    #[test]
    fn idle_is_menu_rejects_leftover_counters() {
        let idle = GameSnapshot::from_state(&GameState::new());
        assert!(IdleIsMenu.check(&idle).is_ok());

        let stale = GameSnapshot { total_incorrect: 2, ..idle.clone() };
        assert!(IdleIsMenu.check(&stale).is_err());

        let with_challenge = GameSnapshot { challenge: Some(0), ..idle };
        assert!(IdleIsMenu.check(&with_challenge).is_err());
    }

    #[test]
    fn idle_is_menu_requires_challenge_when_playing() {
        let snapshot = GameSnapshot { challenge: None, ..playing() };
        assert!(IdleIsMenu.check(&snapshot).is_err());
    }

    #[test]
    fn challenge_in_range_uses_level_table() {
        let glyph = GameSnapshot { challenge: Some(20), ..playing() };
        assert!(ChallengeInRange.check(&glyph).is_ok());

        let word = GameSnapshot { word_level: true, level: 3, ..glyph };
        assert!(ChallengeInRange.check(&word).is_err());
    }

    #[test]
    fn buffers_bounded_rejects_overflow() {
        let snapshot = GameSnapshot { pending_symbols: SYMBOL_CAPACITY, ..playing() };
        let violation = BuffersBounded.check(&snapshot).unwrap_err();
        assert_eq!(violation.invariant, "buffers_bounded");
    }
}
