//! Static Morse tables.
//!
//! Glyph entries are indexed 0..36 (A-Z, then 0-9) and word entries 0..10.
//! Challenge indices refer to these positions, so the order is part of the
//! contract.

use std::{collections::HashMap, sync::LazyLock};

use crate::{Symbol, symbol::parse_pattern};

/// Glyph emitted for a pattern that matches no table entry.
pub const UNKNOWN_GLYPH: char = '?';

/// Number of entries in the glyph table.
pub const GLYPH_COUNT: usize = 36;

/// Number of entries in the word table.
pub const WORD_COUNT: usize = 10;

/// A Morse pattern and the glyph it encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEntry {
    /// Pattern in `.`/`-` notation.
    pub pattern: &'static str,
    /// Uppercase letter or digit.
    pub glyph: char,
}

/// A word and its Morse rendering (letter patterns separated by spaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    /// Space-separated letter patterns.
    pub pattern: &'static str,
    /// Uppercase word.
    pub word: &'static str,
}

const fn g(pattern: &'static str, glyph: char) -> GlyphEntry {
    GlyphEntry { pattern, glyph }
}

const fn w(pattern: &'static str, word: &'static str) -> WordEntry {
    WordEntry { pattern, word }
}

static GLYPHS: [GlyphEntry; GLYPH_COUNT] = [
    g(".-", 'A'),
    g("-...", 'B'),
    g("-.-.", 'C'),
    g("-..", 'D'),
    g(".", 'E'),
    g("..-.", 'F'),
    g("--.", 'G'),
    g("....", 'H'),
    g("..", 'I'),
    g(".---", 'J'),
    g("-.-", 'K'),
    g(".-..", 'L'),
    g("--", 'M'),
    g("-.", 'N'),
    g("---", 'O'),
    g(".--.", 'P'),
    g("--.-", 'Q'),
    g(".-.", 'R'),
    g("...", 'S'),
    g("-", 'T'),
    g("..-", 'U'),
    g("...-", 'V'),
    g(".--", 'W'),
    g("-..-", 'X'),
    g("-.--", 'Y'),
    g("--..", 'Z'),
    g("-----", '0'),
    g(".----", '1'),
    g("..---", '2'),
    g("...--", '3'),
    g("....-", '4'),
    g(".....", '5'),
    g("-....", '6'),
    g("--...", '7'),
    g("---..", '8'),
    g("----.", '9'),
];

static WORDS: [WordEntry; WORD_COUNT] = [
    w(".-- .. -. -..", "WIND"),
    w("-... --- .-.. -..", "BOLD"),
    w(".... --- .--. .", "HOPE"),
    w("..-. . .- .-.", "FEAR"),
    w("- --- .-. -.", "TORN"),
    w("..-. .- ... -", "FAST"),
    w(".-- .. ... .", "WISE"),
    w("- . .- --", "TEAM"),
    w(".-.. --- ..- -..", "LOUD"),
    w("-.-. --- .-.. -..", "COLD"),
];

static STANDARD: LazyLock<MorseTable> = LazyLock::new(MorseTable::build);

/// Bidirectional Morse lookup.
///
/// Decoding goes through a map keyed by the exact symbol sequence, built once
/// per process. Patterns are unique, so the first table entry for a pattern is
/// the only one.
#[derive(Debug)]
pub struct MorseTable {
    glyphs: &'static [GlyphEntry],
    words: &'static [WordEntry],
    by_pattern: HashMap<Vec<Symbol>, char>,
}

impl MorseTable {
    /// The process-wide table of letters, digits and training words.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn build() -> Self {
        let mut by_pattern = HashMap::with_capacity(GLYPHS.len());
        for entry in &GLYPHS {
            match parse_pattern(entry.pattern) {
                Ok(symbols) => {
                    by_pattern.entry(symbols).or_insert(entry.glyph);
                },
                Err(error) => {
                    tracing::error!(glyph = %entry.glyph, %error, "skipping malformed table entry");
                },
            }
        }
        Self { glyphs: &GLYPHS, words: &WORDS, by_pattern }
    }

    /// Glyph for an exact symbol sequence. `None` if no entry matches.
    pub fn decode(&self, symbols: &[Symbol]) -> Option<char> {
        self.by_pattern.get(symbols).copied()
    }

    /// Pattern for a letter or digit (case-insensitive). `None` for anything
    /// outside A-Z and 0-9.
    pub fn encode(&self, glyph: char) -> Option<&'static str> {
        let glyph = glyph.to_ascii_uppercase();
        self.glyphs.iter().find(|e| e.glyph == glyph).map(|e| e.pattern)
    }

    /// Space-separated patterns for every glyph in `word`. `None` if any
    /// glyph has no pattern.
    pub fn encode_word(&self, word: &str) -> Option<String> {
        let patterns = word.chars().map(|c| self.encode(c)).collect::<Option<Vec<_>>>()?;
        Some(patterns.join(" "))
    }

    /// Glyph entry at `index`.
    pub fn glyph(&self, index: usize) -> Option<&GlyphEntry> {
        self.glyphs.get(index)
    }

    /// Word entry at `index`.
    pub fn word(&self, index: usize) -> Option<&WordEntry> {
        self.words.get(index)
    }

    /// All glyph entries in index order.
    pub fn glyphs(&self) -> &[GlyphEntry] {
        self.glyphs
    }

    /// All word entries in index order.
    pub fn words(&self) -> &[WordEntry] {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_pattern_is_unique_and_well_formed() {
        let table = MorseTable::standard();
        assert_eq!(table.by_pattern.len(), GLYPH_COUNT);

        let patterns: HashSet<_> = table.glyphs().iter().map(|e| e.pattern).collect();
        assert_eq!(patterns.len(), GLYPH_COUNT);
        assert!(table.glyphs().iter().all(|e| (1..=5).contains(&e.pattern.len())));
    }

    #[test]
    fn glyph_round_trip() {
        let table = MorseTable::standard();
        for entry in table.glyphs() {
            let symbols = parse_pattern(entry.pattern).expect("table pattern parses");
            assert_eq!(table.decode(&symbols), Some(entry.glyph), "pattern {}", entry.pattern);
            assert_eq!(table.encode(entry.glyph), Some(entry.pattern));
        }
    }

    #[test]
    fn word_patterns_match_letter_encoding() {
        let table = MorseTable::standard();
        for entry in table.words() {
            assert_eq!(table.encode_word(entry.word).as_deref(), Some(entry.pattern));
        }
    }

    #[test]
    fn index_order_is_letters_then_digits() {
        let table = MorseTable::standard();
        assert_eq!(table.glyph(0).map(|e| e.glyph), Some('A'));
        assert_eq!(table.glyph(25).map(|e| e.glyph), Some('Z'));
        assert_eq!(table.glyph(26).map(|e| e.glyph), Some('0'));
        assert_eq!(table.glyph(35).map(|e| e.glyph), Some('9'));
        assert!(table.glyph(GLYPH_COUNT).is_none());
        assert_eq!(table.word(0).map(|e| e.word), Some("WIND"));
        assert!(table.word(WORD_COUNT).is_none());
    }

    #[test]
    fn unknown_sequences_do_not_decode() {
        let table = MorseTable::standard();
        assert_eq!(table.decode(&[]), None);
        assert_eq!(table.decode(&[Symbol::Dash; 6]), None);
        assert_eq!(table.decode(&[Symbol::Dot, Symbol::Dot, Symbol::Dash, Symbol::Dash]), None);
        assert_eq!(table.encode('?'), None);
        assert_eq!(table.encode_word("A?"), None);
    }

    #[test]
    fn encode_is_case_insensitive() {
        let table = MorseTable::standard();
        assert_eq!(table.encode('s'), Some("..."));
        assert_eq!(table.encode_word("sos").as_deref(), Some("... --- ..."));
    }
}
