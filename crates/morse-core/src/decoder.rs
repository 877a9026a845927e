//! Character decoder.
//!
//! Collects presses into a [`SymbolBuffer`] and, at each character boundary,
//! resolves the buffer against the [`MorseTable`] and appends the glyph to the
//! caller's [`AnswerSequence`].

use crate::{AnswerSequence, MorseTable, Symbol, SymbolBuffer, UNKNOWN_GLYPH};

/// Turns presses into glyphs one character at a time.
#[derive(Debug, Clone)]
pub struct Decoder {
    table: &'static MorseTable,
    buffer: SymbolBuffer,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(MorseTable::standard())
    }
}

impl Decoder {
    /// Create a decoder over `table`.
    pub fn new(table: &'static MorseTable) -> Self {
        Self { table, buffer: SymbolBuffer::new() }
    }

    /// Record one press. Returns `false` if the buffer was full and the press
    /// was dropped.
    pub fn press(&mut self, symbol: Symbol) -> bool {
        let accepted = self.buffer.push(symbol);
        if !accepted {
            tracing::warn!(%symbol, "symbol buffer full, dropping press");
        }
        accepted
    }

    /// Close the current character.
    ///
    /// Resolves the buffered pattern to a glyph ([`UNKNOWN_GLYPH`] if nothing
    /// matches), appends it to `answer` unless the answer is full, and clears
    /// the buffer. Returns the resolved glyph either way.
    pub fn complete_character(&mut self, answer: &mut AnswerSequence) -> char {
        let glyph = self.table.decode(self.buffer.as_slice()).unwrap_or(UNKNOWN_GLYPH);
        tracing::trace!(pattern = %self.buffer, %glyph, "character complete");

        if !answer.push(glyph) {
            tracing::warn!(%glyph, len = answer.len(), "answer full, truncating");
        }
        self.buffer.clear();
        glyph
    }

    /// Symbols pressed since the last character boundary.
    pub fn pending(&self) -> &SymbolBuffer {
        &self.buffer
    }

    /// Discard any pending symbols.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ANSWER_CAPACITY;

    fn key(decoder: &mut Decoder, pattern: &str, answer: &mut AnswerSequence) -> char {
        for c in pattern.chars() {
            let symbol = Symbol::try_from(c).expect("test pattern uses . and -");
            decoder.press(symbol);
        }
        decoder.complete_character(answer)
    }

    #[test]
    fn decodes_and_appends() {
        let mut decoder = Decoder::default();
        let mut answer = AnswerSequence::new();

        assert_eq!(key(&mut decoder, "...", &mut answer), 'S');
        assert_eq!(key(&mut decoder, "---", &mut answer), 'O');
        assert_eq!(key(&mut decoder, "...", &mut answer), 'S');
        assert_eq!(answer.to_string(), "SOS");
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn unknown_pattern_becomes_question_mark() {
        let mut decoder = Decoder::default();
        let mut answer = AnswerSequence::new();

        assert_eq!(key(&mut decoder, "..--", &mut answer), UNKNOWN_GLYPH);
        assert_eq!(key(&mut decoder, "", &mut answer), UNKNOWN_GLYPH);
        assert_eq!(answer.as_slice(), &[UNKNOWN_GLYPH, UNKNOWN_GLYPH]);
    }

    #[test]
    fn overlong_press_run_degrades_to_unknown() {
        let mut decoder = Decoder::default();
        let mut answer = AnswerSequence::new();

        for _ in 0..40 {
            decoder.press(Symbol::Dot);
        }
        assert!(decoder.pending().is_full());
        assert!(!decoder.press(Symbol::Dash), "full buffer drops the press");
        assert_eq!(decoder.complete_character(&mut answer), UNKNOWN_GLYPH);
        assert!(decoder.pending().is_empty());

        // Buffer is usable again afterwards
        assert_eq!(key(&mut decoder, ".-", &mut answer), 'A');
    }

    #[test]
    fn full_answer_still_clears_buffer() {
        let mut decoder = Decoder::default();
        let mut answer = AnswerSequence::new();
        for _ in 0..ANSWER_CAPACITY - 1 {
            answer.push('E');
        }

        assert_eq!(key(&mut decoder, "-", &mut answer), 'T');
        assert_eq!(answer.len(), ANSWER_CAPACITY - 1);
        assert!(!answer.as_slice().contains(&'T'));
        assert!(decoder.pending().is_empty());
    }
}
