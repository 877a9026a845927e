//! Fuzz target for the App and game state machines
//!
//! # Strategy
//!
//! - Seeded challenges: the seed is part of the input so crashes replay
//! - Mixed operations: raw presses and keys interleaved with scripted right
//!   and wrong answers, level picks and watchdog restarts
//!
//! # Invariants
//!
//! - Every standard invariant holds after every operation
//! - Input buffers never exceed capacity

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use morse_app::TrainerConfig;
use morse_harness::{GameSnapshot, InvariantRegistry, Operation, Script};

#[derive(Debug, Arbitrary)]
struct Game {
    seed: u64,
    watchdog: bool,
    operations: Vec<Operation>,
}

fuzz_target!(|game: Game| {
    let config =
        if game.watchdog { TrainerConfig::default() } else { TrainerConfig::without_watchdog() };
    let mut script = Script::new(game.seed, config);
    let invariants = InvariantRegistry::standard();

    for (step, operation) in game.operations.into_iter().enumerate() {
        let _ = script.apply(operation);
        invariants.assert_all(
            &GameSnapshot::from_app(script.app()),
            &format!("at step {step} after {operation:?}"),
        );
    }
});
