//! Application layer for the Morse trainer
//!
//! Pure state machine and generic runtime for input handling and game
//! orchestration, enabling deterministic simulation testing with the same code
//! that runs in production.
//!
//! # Components
//!
//! - [`App`]: input state machine (presses, character and word boundaries)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver
//! - [`TrainerConfig`]: watchdog settings shared by the runtime and drivers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod input;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use config::{DEFAULT_PAUSE_ON_DEBUG, DEFAULT_WATCHDOG_TIMEOUT, TrainerConfig, WatchdogConfig};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
