//! Console frontend for the Morse trainer
//!
//! A thin shell over [`morse_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`morse_app::Runtime`].
//!
//! Keys: `.` and `-` key a dot and a dash, space or `/` ends a character,
//! Enter submits the answer, Esc or Ctrl-C quits.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod console;
pub mod output;
pub mod system_env;

pub use console::{ConsoleDriver, ConsoleError};
pub use morse_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime, TrainerConfig};
pub use system_env::ConsoleEnv;
