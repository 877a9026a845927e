//! Error types for the trainer core.
//!
//! The game loop itself has no fatal paths: unknown patterns decode to
//! [`crate::UNKNOWN_GLYPH`] and oversized input is truncated. These errors
//! cover the few places where a caller hands us something we cannot represent.

use thiserror::Error;

/// Errors parsing symbols from their textual form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    /// Character is neither `.` nor `-`.
    #[error("invalid morse symbol {0:?}: expected '.' or '-'")]
    InvalidSymbol(char),
}

/// Errors computing end-of-level statistics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Accuracy is undefined without at least one judged answer.
    #[error("accuracy requires at least one judged answer")]
    NoAnswers,
}
