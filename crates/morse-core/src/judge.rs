//! Answer judging.
//!
//! Glyph levels accept an answer whose first glyph is the target, as long as
//! no more than one stray character followed it. Word levels compare glyph by
//! glyph with the end of either sequence acting as a terminator, over at most
//! [`WORD_COMPARE_LIMIT`] positions.

use std::iter;

use crate::{Level, MorseTable};

/// Longest answer accepted on glyph levels.
pub const GLYPH_ANSWER_LIMIT: usize = 2;

/// Positions compared on word levels.
pub const WORD_COMPARE_LIMIT: usize = 10;

/// Outcome of judging one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Answer matches the challenge.
    Correct,
    /// Answer does not match, or there was nothing to match against.
    Incorrect,
}

/// Judge `answer` against challenge `challenge` of `level`.
///
/// An unknown challenge index or an idle level yields
/// [`Verdict::Incorrect`].
pub fn evaluate(table: &MorseTable, answer: &[char], level: Level, challenge: usize) -> Verdict {
    let correct = if level.is_word_level() {
        table.word(challenge).is_some_and(|entry| word_matches(answer, entry.word))
    } else if level.is_started() {
        table.glyph(challenge).is_some_and(|entry| glyph_matches(answer, entry.glyph))
    } else {
        false
    };

    if correct { Verdict::Correct } else { Verdict::Incorrect }
}

fn glyph_matches(answer: &[char], target: char) -> bool {
    answer.first() == Some(&target) && answer.len() <= GLYPH_ANSWER_LIMIT
}

fn word_matches(answer: &[char], target: &str) -> bool {
    let answer = answer.iter().copied().map(Some).chain(iter::once(None));
    let target = target.chars().map(Some).chain(iter::once(None));

    for (a, t) in answer.zip(target).take(WORD_COMPARE_LIMIT) {
        if a != t {
            return false;
        }
        if a.is_none() {
            break;
        }
    }
    true
}
