//! Morse trainer console entry point.
//!
//! # Usage
//!
//! ```bash
//! # Random challenges, default 9 s watchdog
//! morse-console
//!
//! # Repeatable challenges, no watchdog, verbose logs on stderr
//! morse-console --seed 42 --no-watchdog --log-level debug 2>trainer.log
//! ```

use std::time::Duration;

use clap::Parser;
use morse_app::{DEFAULT_PAUSE_ON_DEBUG, DEFAULT_WATCHDOG_TIMEOUT, WatchdogConfig};
use morse_console::{ConsoleDriver, ConsoleEnv, Runtime, TrainerConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Morse code trainer
#[derive(Parser, Debug)]
#[command(name = "morse-console")]
#[command(about = "Practise keying Morse code letters and words")]
#[command(version)]
struct Args {
    /// Seed for repeatable challenges
    #[arg(long)]
    seed: Option<u64>,

    /// Restart after this many milliseconds without input
    #[arg(long, default_value_t = DEFAULT_WATCHDOG_TIMEOUT.as_millis() as u64)]
    watchdog_ms: u64,

    /// Disable the inactivity watchdog
    #[arg(long)]
    no_watchdog: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn config(&self) -> TrainerConfig {
        if self.no_watchdog {
            return TrainerConfig::without_watchdog();
        }
        TrainerConfig {
            watchdog: Some(WatchdogConfig {
                timeout: Duration::from_millis(self.watchdog_ms),
                pause_on_debug: DEFAULT_PAUSE_ON_DEBUG,
            }),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = args.config();
    tracing::info!(seed = ?args.seed, watchdog = ?config.watchdog, "trainer starting");

    let driver = ConsoleDriver::stdio()?;
    let runtime = Runtime::new(driver, ConsoleEnv::from_seed(args.seed), config);

    Ok(runtime.run().await?)
}
