//! Fuzz target for symbol decoding
//!
//! Feeds arbitrary press sequences to the decoder.
//!
//! # Invariants
//!
//! - Decoding never panics, whatever the length
//! - A decoded glyph encodes back to exactly the presses that were kept
//! - Anything else decodes to the unknown glyph

#![no_main]

use libfuzzer_sys::fuzz_target;
use morse_core::{AnswerSequence, Decoder, MorseTable, Symbol, UNKNOWN_GLYPH};

fuzz_target!(|presses: Vec<bool>| {
    let table = MorseTable::standard();
    let mut decoder = Decoder::new(table);
    let mut answer = AnswerSequence::new();

    for dash in &presses {
        let _ = decoder.press(if *dash { Symbol::Dash } else { Symbol::Dot });
    }
    let kept = decoder.pending().to_string();
    let glyph = decoder.complete_character(&mut answer);

    match table.encode(glyph) {
        Some(pattern) => assert_eq!(pattern, kept, "{glyph} decoded from {kept}"),
        None => assert_eq!(glyph, UNKNOWN_GLYPH),
    }
    assert!(decoder.pending().is_empty());
});
