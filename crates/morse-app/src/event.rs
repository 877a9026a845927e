//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two sources:
//! - The input layer, which has already classified presses as dots or dashes
//!   and detected character and word gaps (or raw [`KeyInput`]s from a
//!   keyboard-style frontend).
//! - The watchdog, which fires when no input arrived in time.

use morse_core::Symbol;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// One classified press.
    Press(Symbol),

    /// Gap long enough to close the current character.
    EndOfCharacter,

    /// Gap long enough to close the current answer.
    EndOfWord,

    /// No input arrived within the watchdog interval.
    WatchdogExpired,
}
