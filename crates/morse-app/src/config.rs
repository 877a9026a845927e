//! Trainer configuration.

use std::time::Duration;

/// Time without input after which the watchdog restarts the trainer.
pub const DEFAULT_WATCHDOG_TIMEOUT: Duration = Duration::from_millis(9000);

/// Whether the watchdog stays paused while the target is halted by a
/// debugger.
pub const DEFAULT_PAUSE_ON_DEBUG: bool = true;

/// Watchdog parameters sent with every kick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogConfig {
    /// Interval the next input must arrive within.
    pub timeout: Duration,
    /// Pause the countdown while halted for inspection.
    pub pause_on_debug: bool,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_WATCHDOG_TIMEOUT, pause_on_debug: DEFAULT_PAUSE_ON_DEBUG }
    }
}

/// Trainer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Liveness watchdog. `None` disables kicks entirely.
    pub watchdog: Option<WatchdogConfig>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self { watchdog: Some(WatchdogConfig::default()) }
    }
}

impl TrainerConfig {
    /// Configuration with the watchdog disabled.
    pub fn without_watchdog() -> Self {
        Self { watchdog: None }
    }
}
