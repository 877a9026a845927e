//! Decode-and-game-state core for the Morse trainer.
//!
//! Turns discrete DOT/DASH presses into glyphs, judges completed answers
//! against the current challenge, and drives level, lives and streak
//! progression. Everything here is synchronous and free of I/O: timing,
//! rendering and watchdog handling live in the outer crates.
//!
//! # Components
//!
//! - [`SymbolBuffer`] and [`AnswerSequence`]: bounded input accumulators
//! - [`MorseTable`]: static pattern/glyph tables
//! - [`Decoder`]: resolves a completed character into a glyph
//! - [`ChallengeGenerator`]: picks targets for the current level
//! - [`judge`]: compares an answer against the target
//! - [`GameStateMachine`]: owns [`GameState`] and emits [`GameAction`]s
//! - [`stats`]: accuracy reporting for level and game summaries

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod answer;
mod challenge;
mod decoder;
mod env;
mod error;
mod game;
pub mod judge;
mod report;
pub mod stats;
mod status;
mod symbol;
mod table;

pub use answer::{ANSWER_CAPACITY, AnswerSequence};
pub use challenge::ChallengeGenerator;
pub use decoder::Decoder;
pub use env::Environment;
pub use error::{StatsError, SymbolError};
pub use game::{GOAL_TO_WIN, GameAction, GameState, GameStateMachine, Level, MAX_LIVES};
pub use judge::Verdict;
pub use report::{Prompt, Report};
pub use stats::{Accuracy, StatsReport};
pub use status::StatusColor;
pub use symbol::{SYMBOL_CAPACITY, Symbol, SymbolBuffer};
pub use table::{GLYPH_COUNT, GlyphEntry, MorseTable, UNKNOWN_GLYPH, WORD_COUNT, WordEntry};
