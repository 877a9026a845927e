//! Game state machine.
//!
//! This module defines [`GameStateMachine`], which owns the single
//! [`GameState`] and advances it one judged answer at a time. It performs no
//! I/O: every call returns [`GameAction`]s (reports, status light updates) for
//! the caller to execute.
//!
//! # State Machine
//!
//! ```text
//!            select 1-4                 5 correct           5 correct
//! ┌──────┐ ───────────> ┌────────┐ ───────────> ... ───> ┌────────┐
//! │ Idle │              │ LevelN │                       │ Level4 │
//! └──────┘ <─────────── └────────┘                       └────────┘
//!     ^      lives == 0                                      │
//!     └──────────────────────── game won ────────────────────┘
//! ```

use std::fmt;

use crate::{
    ChallengeGenerator, Environment, MorseTable, Prompt, Report, StatsReport, StatusColor,
    judge::{self, Verdict},
    stats,
};

/// Lives at the start of every level selection and after every reset.
pub const MAX_LIVES: u8 = 3;

/// Consecutive correct answers that complete a level.
pub const GOAL_TO_WIN: u8 = 5;

/// Difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// No game running; the player is choosing a level.
    Idle,
    /// Single glyphs with the Morse hint shown.
    Level1,
    /// Single glyphs without a hint.
    Level2,
    /// Words with the Morse hint shown.
    Level3,
    /// Words without a hint.
    Level4,
}

impl Level {
    /// Level chosen by keying its digit in the menu.
    pub fn from_selection(glyph: char) -> Option<Self> {
        match glyph {
            '1' => Some(Self::Level1),
            '2' => Some(Self::Level2),
            '3' => Some(Self::Level3),
            '4' => Some(Self::Level4),
            _ => None,
        }
    }

    /// Level number, 1 to 4. `None` while idle.
    pub fn number(self) -> Option<u8> {
        match self {
            Self::Idle => None,
            Self::Level1 => Some(1),
            Self::Level2 => Some(2),
            Self::Level3 => Some(3),
            Self::Level4 => Some(4),
        }
    }

    /// True for every level except [`Level::Idle`].
    pub fn is_started(self) -> bool {
        self != Self::Idle
    }

    /// True if challenges come from the word table.
    pub fn is_word_level(self) -> bool {
        matches!(self, Self::Level3 | Self::Level4)
    }

    /// True if prompts include the target's Morse pattern.
    pub fn shows_hint(self) -> bool {
        matches!(self, Self::Level1 | Self::Level3)
    }

    /// Level reached by completing this one. `None` after the last level.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Level1 => Some(Self::Level2),
            Self::Level2 => Some(Self::Level3),
            Self::Level3 => Some(Self::Level4),
            Self::Idle | Self::Level4 => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "Level {n}"),
            None => write!(f, "Idle"),
        }
    }
}

/// Mutable game state.
///
/// Only [`GameStateMachine`] mutates a live state. The constructors here exist
/// to start a machine from a known position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    level: Level,
    lives: u8,
    streak: u8,
    total_correct: u32,
    total_incorrect: u32,
    challenge: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Idle with full lives.
    pub fn new() -> Self {
        Self {
            level: Level::Idle,
            lives: MAX_LIVES,
            streak: 0,
            total_correct: 0,
            total_incorrect: 0,
            challenge: None,
        }
    }

    /// Mid-game position on `level`.
    ///
    /// Lives are clamped to `1..=MAX_LIVES` and the streak to
    /// `0..GOAL_TO_WIN`. An idle `level` yields [`GameState::new`].
    pub fn playing(level: Level, lives: u8, streak: u8) -> Self {
        if !level.is_started() {
            return Self::new();
        }
        Self {
            level,
            lives: lives.clamp(1, MAX_LIVES),
            streak: streak.min(GOAL_TO_WIN - 1),
            ..Self::new()
        }
    }

    /// Same position with the given running totals.
    #[must_use]
    pub fn with_totals(mut self, correct: u32, incorrect: u32) -> Self {
        self.total_correct = correct;
        self.total_incorrect = incorrect;
        self
    }

    /// Current level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Lives remaining.
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Consecutive correct answers on this level.
    pub fn streak(&self) -> u8 {
        self.streak
    }

    /// Correct answers since the last level start or reset.
    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    /// Incorrect answers since the last level start or reset.
    pub fn total_incorrect(&self) -> u32 {
        self.total_incorrect
    }

    /// Index of the current challenge in the level's table. `None` while idle.
    pub fn challenge(&self) -> Option<usize> {
        self.challenge
    }

    /// True while a level is being played.
    pub fn is_started(&self) -> bool {
        self.level.is_started()
    }

    /// Status light colour for this state.
    pub fn status(&self) -> StatusColor {
        StatusColor::from_state(self.is_started(), self.lives)
    }

    fn reset_totals(&mut self) {
        self.total_correct = 0;
        self.total_incorrect = 0;
    }

    fn return_to_menu(&mut self) {
        self.level = Level::Idle;
        self.lives = MAX_LIVES;
        self.streak = 0;
        self.challenge = None;
        self.reset_totals();
    }
}

/// Side effects produced by the game state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Show a report to the player.
    Report(Report),
    /// Update the status light.
    Status(StatusColor),
}

/// Level, lives and streak progression driven by judged answers.
///
/// Pure state machine: no I/O, randomness injected through [`Environment`].
#[derive(Debug, Clone)]
pub struct GameStateMachine<E> {
    state: GameState,
    table: &'static MorseTable,
    generator: ChallengeGenerator<E>,
}

impl<E: Environment> GameStateMachine<E> {
    /// Create an idle machine.
    pub fn new(env: E) -> Self {
        Self::with_state(env, GameState::new())
    }

    /// Create a machine at a known position.
    ///
    /// Draws a challenge if `state` is mid-game without one.
    pub fn with_state(env: E, state: GameState) -> Self {
        let mut machine =
            Self { state, table: MorseTable::standard(), generator: ChallengeGenerator::new(env) };
        if machine.state.is_started() && machine.state.challenge.is_none() {
            machine.state.challenge = machine.generator.next(machine.state.level);
        }
        machine
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Table challenges are drawn from.
    pub fn table(&self) -> &'static MorseTable {
        self.table
    }

    /// Actions shown when the trainer first starts.
    pub fn welcome(&self) -> Vec<GameAction> {
        vec![GameAction::Report(Report::Welcome), GameAction::Status(self.state.status())]
    }

    /// Glyph or word the player must currently key. `None` while idle.
    pub fn current_target(&self) -> Option<String> {
        let index = self.state.challenge?;
        if self.state.level.is_word_level() {
            self.table.word(index).map(|e| e.word.to_string())
        } else {
            self.table.glyph(index).map(|e| e.glyph.to_string())
        }
    }

    /// Prompt for the current challenge. `None` while idle.
    pub fn current_prompt(&self) -> Option<Prompt> {
        let index = self.state.challenge?;
        let (target, pattern) = if self.state.level.is_word_level() {
            self.table.word(index).map(|e| (e.word.to_string(), e.pattern))?
        } else {
            self.table.glyph(index).map(|e| (e.glyph.to_string(), e.pattern))?
        };

        Some(Prompt {
            level: self.state.level,
            lives: self.state.lives,
            streak: self.state.streak,
            target,
            hint: self.state.level.shows_hint().then_some(pattern),
        })
    }

    /// Process a completed answer and return actions.
    ///
    /// While idle the answer is a level selection; otherwise it is judged
    /// against the current challenge. Always ends with a status update.
    pub fn handle_answer(&mut self, answer: &[char]) -> Vec<GameAction> {
        let mut actions = Vec::new();

        if self.state.is_started() {
            let verdict = self.state.challenge.map_or(Verdict::Incorrect, |challenge| {
                judge::evaluate(self.table, answer, self.state.level, challenge)
            });
            tracing::debug!(level = %self.state.level, ?verdict, answer = ?answer, "answer judged");

            match verdict {
                Verdict::Correct => self.on_correct(&mut actions),
                Verdict::Incorrect => self.on_incorrect(&mut actions),
            }
        } else {
            self.select_level(answer, &mut actions);
        }

        actions.push(GameAction::Status(self.state.status()));
        actions
    }

    fn select_level(&mut self, answer: &[char], actions: &mut Vec<GameAction>) {
        let level = match answer {
            [digit] | [digit, _] => Level::from_selection(*digit),
            _ => None,
        };
        let Some(level) = level else {
            tracing::debug!(answer = ?answer, "ignoring input while idle");
            return;
        };

        tracing::info!(%level, "level selected");
        self.state = GameState::playing(level, MAX_LIVES, 0);
        self.next_challenge(actions);
    }

    fn on_correct(&mut self, actions: &mut Vec<GameAction>) {
        actions.push(GameAction::Report(Report::Correct));

        let state = &mut self.state;
        state.streak += 1;
        state.total_correct = state.total_correct.saturating_add(1);
        if state.lives < MAX_LIVES {
            state.lives += 1;
        }

        if self.state.streak >= GOAL_TO_WIN {
            if let Some(report) = self.stats_report() {
                actions.push(GameAction::Report(Report::LevelComplete(report)));
            }
            self.state.streak = 0;
            self.state.reset_totals();

            if let Some(next) = self.state.level.next() {
                tracing::info!(from = %self.state.level, to = %next, "level complete");
                self.state.level = next;
            } else {
                tracing::info!("game won");
                actions.push(GameAction::Report(Report::GameWon));
                self.state.return_to_menu();
                actions.push(GameAction::Report(Report::Welcome));
                return;
            }
        }

        self.next_challenge(actions);
    }

    fn on_incorrect(&mut self, actions: &mut Vec<GameAction>) {
        actions.push(GameAction::Report(Report::Incorrect));

        let state = &mut self.state;
        state.lives = state.lives.saturating_sub(1);
        state.total_incorrect = state.total_incorrect.saturating_add(1);
        state.streak = 0;

        if self.state.lives == 0 {
            tracing::info!(level = %self.state.level, "game over");
            if let Some(report) = self.stats_report() {
                actions.push(GameAction::Report(Report::GameOver(report)));
            }
            self.state.return_to_menu();
            actions.push(GameAction::Report(Report::Welcome));
            return;
        }

        self.next_challenge(actions);
    }

    fn next_challenge(&mut self, actions: &mut Vec<GameAction>) {
        self.state.challenge = self.generator.next(self.state.level);
        if let Some(prompt) = self.current_prompt() {
            actions.push(GameAction::Report(Report::Prompt(prompt)));
        }
    }

    fn stats_report(&self) -> Option<StatsReport> {
        match stats::report(self.state.total_correct, self.state.total_incorrect) {
            Ok(report) => Some(report),
            Err(error) => {
                tracing::error!(%error, "no answers counted before summary");
                None
            },
        }
    }
}
