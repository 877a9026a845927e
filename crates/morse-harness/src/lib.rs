//! Deterministic simulation harness for the Morse trainer.
//!
//! Seeded implementations of the Environment and Driver traits for
//! deterministic, reproducible games.
//!
//! # Scripted Players
//!
//! The `scenario` module plays against a shadow App seeded like the App under
//! test, so scripts can key right or wrong answers to challenges they cannot
//! see in advance.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! game invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod scenario;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    BuffersBounded, ChallengeInRange, GameSnapshot, IdleIsMenu, Invariant, InvariantRegistry,
    InvariantResult, LivesBounded, StreakBounded, Violation,
};
pub use scenario::{Operation, Script, answer_events, answer_keys};
pub use sim_driver::{SimDriver, SimDriverError};
pub use sim_env::SimEnv;
