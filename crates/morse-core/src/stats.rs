//! End-of-level statistics.
//!
//! Accuracy is computed in integer basis points and truncated, so 2 of 3
//! correct reports `66.66`, never a rounded-up `66.67`.

use std::fmt;

use crate::StatsError;

/// Percentage split into whole and hundredths parts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy {
    /// Whole percent, 0..=100.
    pub whole: u32,
    /// Hundredths of a percent, 0..=99.
    pub hundredths: u32,
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.whole, self.hundredths)
    }
}

/// Totals and accuracy for a finished level or game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReport {
    /// Correct answers counted.
    pub correct: u32,
    /// Incorrect answers counted.
    pub incorrect: u32,
    /// `100 * correct / (correct + incorrect)`.
    pub accuracy: Accuracy,
}

/// Build a report from running totals.
///
/// # Errors
///
/// - `StatsError::NoAnswers` if both totals are zero.
pub fn report(correct: u32, incorrect: u32) -> Result<StatsReport, StatsError> {
    let total = u64::from(correct) + u64::from(incorrect);
    if total == 0 {
        return Err(StatsError::NoAnswers);
    }

    let basis_points = u64::from(correct) * 10_000 / total;
    let accuracy =
        Accuracy { whole: (basis_points / 100) as u32, hundredths: (basis_points % 100) as u32 };

    Ok(StatsReport { correct, incorrect, accuracy })
}
