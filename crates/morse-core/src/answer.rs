//! Decoded glyphs for the answer currently being keyed.

use std::fmt;

/// Nominal capacity of an answer, including the reserved terminator slot.
pub const ANSWER_CAPACITY: usize = 198;

/// Glyphs decoded since the last judged answer.
///
/// Same saturating contract as [`crate::SymbolBuffer`]: once full, further
/// glyphs are dropped and the answer simply truncates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSequence {
    glyphs: heapless::Vec<char, { ANSWER_CAPACITY - 1 }>,
}

impl AnswerSequence {
    /// Create an empty answer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a glyph. Returns `false` if the answer is full.
    pub fn push(&mut self, glyph: char) -> bool {
        self.glyphs.push(glyph).is_ok()
    }

    /// Decoded glyphs in keying order.
    pub fn as_slice(&self) -> &[char] {
        &self.glyphs
    }

    /// Number of decoded glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True if nothing has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Discard the answer.
    pub fn clear(&mut self) {
        self.glyphs.clear();
    }
}

impl fmt::Display for AnswerSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|g| write!(f, "{g}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_instead_of_overflowing() {
        let mut answer = AnswerSequence::new();
        for _ in 0..ANSWER_CAPACITY - 1 {
            assert!(answer.push('E'));
        }
        assert!(!answer.push('T'));
        assert_eq!(answer.len(), ANSWER_CAPACITY - 1);
        assert_eq!(answer.as_slice().last(), Some(&'E'));
    }

    #[test]
    fn displays_as_text() {
        let mut answer = AnswerSequence::new();
        for glyph in "SOS".chars() {
            answer.push(glyph);
        }
        assert_eq!(answer.to_string(), "SOS");
        answer.clear();
        assert!(answer.is_empty());
    }
}
