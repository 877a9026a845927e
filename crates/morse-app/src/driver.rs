//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use morse_core::{Report, StatusColor, Symbol};

use crate::{AppEvent, WatchdogConfig};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in production and simulation.
///
/// # Implementations
///
/// - **Console**: crossterm key events in raw mode, with a timer-based
///   watchdog
/// - **Simulation**: scripted events and captured output
///
/// # Event ordering
///
/// Events must be delivered one at a time. Drivers with concurrent sources
/// serialise them (e.g. through a single-consumer channel) before returning
/// them from [`poll_event`](Driver::poll_event).
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once input is exhausted and the runtime should stop.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Show a report to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    fn report(&mut self, report: &Report) -> Result<(), Self::Error>;

    /// Set the status light.
    fn set_status(&mut self, color: StatusColor) -> Result<(), Self::Error>;

    /// Echo an accepted press.
    fn echo_symbol(&mut self, symbol: Symbol) -> Result<(), Self::Error>;

    /// Echo a decoded glyph.
    fn echo_glyph(&mut self, glyph: char) -> Result<(), Self::Error>;

    /// Reset the watchdog countdown.
    ///
    /// Once kicked, the driver must deliver [`AppEvent::WatchdogExpired`] if
    /// no input arrives within `config.timeout`.
    fn kick_watchdog(&mut self, config: WatchdogConfig);

    /// Stop input and clean up resources.
    fn stop(&mut self);
}
