//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the trainer at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks. Snapshots also serialize, so scripted games can
//! be pinned with insta.

use morse_app::App;
use morse_core::{Environment, GameState, StatusColor};
use serde::Serialize;

/// Snapshot of the trainer's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Level number, 0 while idle.
    pub level: u8,
    /// True for the word levels.
    pub word_level: bool,
    /// Lives remaining.
    pub lives: u8,
    /// Consecutive correct answers.
    pub streak: u8,
    /// Correct answers since the level started.
    pub total_correct: u32,
    /// Incorrect answers since the level started.
    pub total_incorrect: u32,
    /// Index of the current challenge.
    pub challenge: Option<usize>,
    /// Current challenge text.
    pub target: Option<String>,
    /// Status light colour.
    pub status: String,
    /// Symbols keyed for the unfinished character.
    pub pending_symbols: usize,
    /// Glyphs keyed for the unfinished answer.
    pub answer_len: usize,
}

impl GameSnapshot {
    /// Capture the state of an App.
    pub fn from_app<E: Environment>(app: &App<E>) -> Self {
        let game = app.game();
        let mut snapshot = Self::from_state(game.state());
        snapshot.target = game.current_target();
        snapshot.pending_symbols = app.decoder().pending().len();
        snapshot.answer_len = app.answer().len();
        snapshot
    }

    /// Capture a bare game state, with empty input buffers.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            level: state.level().number().unwrap_or(0),
            word_level: state.level().is_word_level(),
            lives: state.lives(),
            streak: state.streak(),
            total_correct: state.total_correct(),
            total_incorrect: state.total_incorrect(),
            challenge: state.challenge(),
            target: None,
            status: status_name(state.status()).to_string(),
            pending_symbols: 0,
            answer_len: 0,
        }
    }
}

fn status_name(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Blue => "blue",
        StatusColor::Green => "green",
        StatusColor::Yellow => "yellow",
        StatusColor::Orange => "orange",
        StatusColor::Red => "red",
    }
}
