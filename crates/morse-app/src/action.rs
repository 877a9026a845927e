//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use morse_core::{Report, StatusColor, Symbol};

use crate::WatchdogConfig;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Show a report.
    Report(Report),

    /// Set the status light.
    Status(StatusColor),

    /// Echo an accepted press.
    EchoSymbol(Symbol),

    /// Echo the glyph a character decoded to.
    EchoGlyph(char),

    /// Reset the liveness watchdog.
    KickWatchdog(WatchdogConfig),

    /// Discard all state and start over from the welcome screen.
    Restart,

    /// Quit the application.
    Quit,
}
