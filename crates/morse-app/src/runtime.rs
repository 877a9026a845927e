//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: input and game state machine
//! - [`Driver`]: Platform-specific I/O
//!
//! It also owns recovery: a [`AppAction::Restart`] (raised when the watchdog
//! expires) replaces the App with a fresh one, the way a hardware watchdog
//! reset would reboot the trainer.

use morse_core::Environment;

use crate::{App, AppAction, Driver, TrainerConfig};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `E`: Environment for challenge selection
pub struct Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    driver: D,
    app: App<E>,
    env: E,
    config: TrainerConfig,
    restarts: u64,
}

impl<D, E> Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    /// Create a new runtime with the given driver and environment.
    pub fn new(driver: D, env: E, config: TrainerConfig) -> Self {
        let app = App::new(env.clone(), config.clone());
        Self { driver, app, env, config, restarts: 0 }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Shows the welcome screen
    /// 2. Polls for input events from the driver
    /// 3. Feeds each event to the App and executes the resulting actions
    ///
    /// Returns when input is exhausted or the App asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        let actions = self.app.start();
        self.process_actions(actions)?;

        while let Some(event) = self.driver.poll_event().await? {
            tracing::trace!(?event, "event");
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                break;
            }
        }

        tracing::debug!(restarts = self.restarts, "runtime stopped");
        self.driver.stop();
        Ok(())
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if the application should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Report(report) => self.driver.report(&report)?,
                AppAction::Status(color) => self.driver.set_status(color)?,
                AppAction::EchoSymbol(symbol) => self.driver.echo_symbol(symbol)?,
                AppAction::EchoGlyph(glyph) => self.driver.echo_glyph(glyph)?,
                AppAction::KickWatchdog(config) => self.driver.kick_watchdog(config),
                AppAction::Quit => return Ok(true),
                AppAction::Restart => {
                    self.restart()?;
                    return Ok(false);
                },
            }
        }
        Ok(false)
    }

    /// Replace the App with a fresh one and show the welcome screen.
    fn restart(&mut self) -> Result<(), D::Error> {
        self.restarts += 1;
        tracing::warn!(restarts = self.restarts, "restarting trainer");

        self.app = App::new(self.env.clone(), self.config.clone());
        let actions = self.app.start();
        self.process_actions(actions).map(|_| ())
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App<E> {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Number of watchdog restarts so far.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}
