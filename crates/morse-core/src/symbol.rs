//! Morse symbols and the per-character symbol buffer.

use std::fmt;

use crate::SymbolError;

/// Nominal capacity of the symbol buffer, including the reserved terminator
/// slot. At most `SYMBOL_CAPACITY - 1` symbols are stored.
pub const SYMBOL_CAPACITY: usize = 18;

/// A single timed press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short press.
    Dot,
    /// Long press.
    Dash,
}

impl Symbol {
    /// Textual form used in patterns and echoes.
    pub fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Self::Dot),
            '-' => Ok(Self::Dash),
            other => Err(SymbolError::InvalidSymbol(other)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a textual pattern such as `".-"` into symbols.
pub(crate) fn parse_pattern(pattern: &str) -> Result<Vec<Symbol>, SymbolError> {
    pattern.chars().map(Symbol::try_from).collect()
}

/// Symbols accumulated for the character currently being keyed.
///
/// Fixed capacity with saturating append: presses beyond the limit are
/// dropped, already-buffered symbols are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolBuffer {
    symbols: heapless::Vec<Symbol, { SYMBOL_CAPACITY - 1 }>,
}

impl SymbolBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symbol. Returns `false` if the buffer is full and the symbol
    /// was dropped.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        self.symbols.push(symbol).is_ok()
    }

    /// Buffered symbols in press order.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of buffered symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if no symbols are buffered.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True if further presses will be dropped.
    pub fn is_full(&self) -> bool {
        self.symbols.is_full()
    }

    /// Discard all buffered symbols.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}

impl fmt::Display for SymbolBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbols() {
        assert_eq!(Symbol::try_from('.'), Ok(Symbol::Dot));
        assert_eq!(Symbol::try_from('-'), Ok(Symbol::Dash));
        assert_eq!(Symbol::try_from('_'), Err(SymbolError::InvalidSymbol('_')));
    }

    #[test]
    fn parse_pattern_rejects_garbage() {
        assert_eq!(parse_pattern("-.-"), Ok(vec![Symbol::Dash, Symbol::Dot, Symbol::Dash]));
        assert_eq!(parse_pattern(".x"), Err(SymbolError::InvalidSymbol('x')));
        assert_eq!(parse_pattern(""), Ok(vec![]));
    }

    #[test]
    fn buffer_saturates_at_capacity() {
        let mut buffer = SymbolBuffer::new();
        for _ in 0..SYMBOL_CAPACITY - 1 {
            assert!(buffer.push(Symbol::Dot));
        }
        assert!(buffer.is_full());

        // 18th and later presses are dropped
        assert!(!buffer.push(Symbol::Dash));
        assert!(!buffer.push(Symbol::Dash));
        assert_eq!(buffer.len(), SYMBOL_CAPACITY - 1);
        assert!(buffer.as_slice().iter().all(|s| *s == Symbol::Dot));
    }

    #[test]
    fn display_renders_pattern() {
        let mut buffer = SymbolBuffer::new();
        buffer.push(Symbol::Dot);
        buffer.push(Symbol::Dash);
        assert_eq!(buffer.to_string(), ".-");

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.to_string(), "");
    }
}
