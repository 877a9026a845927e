//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the console driver but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`morse_app::Runtime`] orchestration code runs in both production and
//! simulation.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use morse_app::{App, AppEvent, Driver, WatchdogConfig};
use morse_core::{Environment, Report, StatusColor, Symbol};

use crate::invariants::{GameSnapshot, InvariantRegistry};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Shared state for event injection and output capture.
#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    reports: Vec<Report>,
    statuses: Vec<StatusColor>,
    echo: String,
    kicks: usize,
    watchdog: Option<WatchdogConfig>,
    fail_output: bool,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Clones share state, so a test can keep a handle after moving the driver
/// into a [`morse_app::Runtime`].
#[derive(Clone, Default)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Inject several events in order.
    pub fn inject_events(&self, events: impl IntoIterator<Item = AppEvent>) {
        self.lock().pending_events.extend(events);
    }

    /// Simulate a quiet period with no input.
    ///
    /// Queues [`AppEvent::WatchdogExpired`] if the watchdog is armed and
    /// `elapsed` reaches its timeout.
    pub fn advance_idle(&self, elapsed: std::time::Duration) {
        let mut state = self.lock();
        if state.watchdog.is_some_and(|config| elapsed >= config.timeout) {
            state.watchdog = None;
            state.pending_events.push_back(AppEvent::WatchdogExpired);
        }
    }

    /// Make every subsequent output call fail.
    pub fn fail_output(&self) {
        self.lock().fail_output = true;
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// Reports shown so far.
    pub fn reports(&self) -> Vec<Report> {
        self.lock().reports.clone()
    }

    /// Status colours set so far.
    pub fn statuses(&self) -> Vec<StatusColor> {
        self.lock().statuses.clone()
    }

    /// Echoed presses and glyphs.
    pub fn echo(&self) -> String {
        self.lock().echo.clone()
    }

    /// Number of watchdog kicks.
    pub fn kicks(&self) -> usize {
        self.lock().kicks
    }

    /// Watchdog settings from the latest kick, if armed.
    pub fn watchdog(&self) -> Option<WatchdogConfig> {
        self.lock().watchdog
    }

    /// True once the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Check invariants against App state.
    pub fn check_invariants<E: Environment>(
        &self,
        registry: &InvariantRegistry,
        app: &App<E>,
        context: &str,
    ) {
        registry.assert_all(&GameSnapshot::from_app(app), context);
    }

    fn output(&self, write: impl FnOnce(&mut SharedState)) -> Result<(), SimDriverError> {
        let mut state = self.lock();
        if state.fail_output {
            return Err(SimDriverError("output closed".to_string()));
        }
        write(&mut state);
        Ok(())
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        Ok(self.lock().pending_events.pop_front())
    }

    fn report(&mut self, report: &Report) -> Result<(), Self::Error> {
        self.output(|state| state.reports.push(report.clone()))
    }

    fn set_status(&mut self, color: StatusColor) -> Result<(), Self::Error> {
        self.output(|state| state.statuses.push(color))
    }

    fn echo_symbol(&mut self, symbol: Symbol) -> Result<(), Self::Error> {
        self.output(|state| state.echo.push(symbol.as_char()))
    }

    fn echo_glyph(&mut self, glyph: char) -> Result<(), Self::Error> {
        self.output(|state| {
            state.echo.push('=');
            state.echo.push(glyph);
            state.echo.push(' ');
        })
    }

    fn kick_watchdog(&mut self, config: WatchdogConfig) {
        let mut state = self.lock();
        state.kicks += 1;
        state.watchdog = Some(config);
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}
