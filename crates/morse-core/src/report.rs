//! Textual reports.
//!
//! Each report carries the state it describes, so rendering is a pure
//! function of the value. Reports never feed back into control flow.

use std::fmt;

use crate::{GOAL_TO_WIN, Level, MAX_LIVES, StatsReport};

/// Inner width of the report boxes.
const WIDTH: usize = 47;

/// The challenge currently shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Level being played.
    pub level: Level,
    /// Lives remaining.
    pub lives: u8,
    /// Consecutive correct answers so far.
    pub streak: u8,
    /// Glyph or word to key.
    pub target: String,
    /// Morse rendering of the target. `None` on levels without hints.
    pub hint: Option<&'static str>,
}

/// Messages shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Title and level menu.
    Welcome,
    /// Answer accepted.
    Correct,
    /// Answer rejected.
    Incorrect,
    /// Level finished, with the level's statistics.
    LevelComplete(StatsReport),
    /// All lives lost, with the game's statistics.
    GameOver(StatsReport),
    /// Final level finished.
    GameWon,
    /// Next challenge.
    Prompt(Prompt),
}

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "+{}+", "-".repeat(WIDTH + 2))
}

fn line(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    writeln!(f, "| {text:<WIDTH$} |")
}

fn stats(f: &mut fmt::Formatter<'_>, stats: &StatsReport) -> fmt::Result {
    line(f, "Stats for this level:")?;
    line(f, &format!("  {} correct answers", stats.correct))?;
    line(f, &format!("  {} incorrect answers", stats.incorrect))?;
    line(f, &format!("  Total accuracy: {}", stats.accuracy))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        rule(f)?;
        match self {
            Self::Welcome => {
                line(f, "Welcome to the Morse code trainer!")?;
                rule(f)?;
                line(f, "Key a level number to choose a level:")?;
                line(f, "  .----  Level 1 - easy (letters, with hints)")?;
                line(f, "  ..---  Level 2 - medium (letters)")?;
                line(f, "  ...--  Level 3 - hard (words, with hints)")?;
                line(f, "  ....-  Level 4 - expert (words)")?;
                rule(f)?;
                line(f, &format!("{GOAL_TO_WIN} correct in a row completes a level."))?;
                line(f, &format!("You start with {MAX_LIVES} lives. Mistakes cost a life,"))?;
                line(f, "correct answers win lost lives back.")?;
            },
            Self::Correct => {
                line(f, "Correct! On to the next one.")?;
            },
            Self::Incorrect => {
                line(f, "Incorrect: the sequence doesn't match.")?;
            },
            Self::LevelComplete(report) => {
                line(f, "Level complete!")?;
                stats(f, report)?;
            },
            Self::GameOver(report) => {
                line(f, "Game over! Restarting...")?;
                stats(f, report)?;
            },
            Self::GameWon => {
                line(f, "You won!")?;
                line(f, "Congratulations on finishing the game.")?;
            },
            Self::Prompt(prompt) => {
                line(f, &format!("{}", prompt.level))?;
                line(f, &format!("Lives left: {}", prompt.lives))?;
                line(f, &format!("Current streak: {} correct answers", prompt.streak))?;
                line(f, "")?;
                line(f, &format!("Enter the morse code for: {}", prompt.target))?;
                if let Some(hint) = prompt.hint {
                    line(f, &format!("Morse: {hint}"))?;
                }
            },
        }
        write!(f, "+{}+", "-".repeat(WIDTH + 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;

    #[test]
    fn welcome_lists_level_codes() {
        insta::assert_snapshot!(Report::Welcome.to_string(), @r"
        +-------------------------------------------------+
        | Welcome to the Morse code trainer!              |
        +-------------------------------------------------+
        | Key a level number to choose a level:           |
        |   .----  Level 1 - easy (letters, with hints)   |
        |   ..---  Level 2 - medium (letters)             |
        |   ...--  Level 3 - hard (words, with hints)     |
        |   ....-  Level 4 - expert (words)               |
        +-------------------------------------------------+
        | 5 correct in a row completes a level.           |
        | You start with 3 lives. Mistakes cost a life,   |
        | correct answers win lost lives back.            |
        +-------------------------------------------------+
        ");
    }

    #[test]
    fn correct_report() {
        insta::assert_snapshot!(Report::Correct.to_string(), @r"
        +-------------------------------------------------+
        | Correct! On to the next one.                    |
        +-------------------------------------------------+
        ");
    }

    #[test]
    fn level_complete_includes_accuracy() {
        let report = stats::report(3, 1).expect("non-zero totals");
        insta::assert_snapshot!(Report::LevelComplete(report).to_string(), @r"
        +-------------------------------------------------+
        | Level complete!                                 |
        | Stats for this level:                           |
        |   3 correct answers                             |
        |   1 incorrect answers                           |
        |   Total accuracy: 75.00%                        |
        +-------------------------------------------------+
        ");
    }

    #[test]
    fn prompt_shows_hint_when_present() {
        let prompt = Prompt {
            level: Level::Level1,
            lives: 3,
            streak: 2,
            target: "A".to_string(),
            hint: Some(".-"),
        };
        insta::assert_snapshot!(Report::Prompt(prompt).to_string(), @r"
        +-------------------------------------------------+
        | Level 1                                         |
        | Lives left: 3                                   |
        | Current streak: 2 correct answers               |
        |                                                 |
        | Enter the morse code for: A                     |
        | Morse: .-                                       |
        +-------------------------------------------------+
        ");
    }

    #[test]
    fn prompt_without_hint_omits_morse_line() {
        let prompt = Prompt {
            level: Level::Level4,
            lives: 1,
            streak: 0,
            target: "WIND".to_string(),
            hint: None,
        };
        let text = Report::Prompt(prompt).to_string();
        assert!(text.contains("Enter the morse code for: WIND"));
        assert!(!text.contains("Morse:"));
    }

    #[test]
    fn every_line_has_the_same_width() {
        let stats = stats::report(1, 1).expect("non-zero totals");
        for report in [
            Report::Welcome,
            Report::Incorrect,
            Report::GameOver(stats),
            Report::GameWon,
        ] {
            let text = report.to_string();
            assert!(text.lines().all(|l| l.chars().count() == WIDTH + 4), "{text}");
        }
    }
}
