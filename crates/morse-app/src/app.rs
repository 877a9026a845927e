//! Application state machine.
//!
//! This module defines the [`App`] state machine, which turns input events
//! into decoded answers and hands completed answers to the game, completely
//! decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the [`Decoder`] and the [`AnswerSequence`] for the current answer.
//! - Forwards completed answers to the [`GameStateMachine`].
//! - Kicks the watchdog once per accepted input event.

use morse_core::{AnswerSequence, Decoder, Environment, GameAction, GameStateMachine, Symbol};

use crate::{AppAction, AppEvent, KeyInput, TrainerConfig};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App<E> {
    /// Presses for the character being keyed.
    decoder: Decoder,
    /// Glyphs for the answer being keyed.
    answer: AnswerSequence,
    /// Level, lives and streak.
    game: GameStateMachine<E>,
    /// Watchdog settings.
    config: TrainerConfig,
}

impl<E: Environment> App<E> {
    /// Create a new App drawing challenges from `env`.
    pub fn new(env: E, config: TrainerConfig) -> Self {
        Self::with_game(GameStateMachine::new(env), config)
    }

    /// Create an App around an existing game.
    pub fn with_game(game: GameStateMachine<E>, config: TrainerConfig) -> Self {
        Self { decoder: Decoder::default(), answer: AnswerSequence::new(), game, config }
    }

    /// Actions for the first screen: welcome menu, status light, and an
    /// initial watchdog kick.
    pub fn start(&self) -> Vec<AppAction> {
        let mut actions: Vec<_> = self.game.welcome().into_iter().map(AppAction::from).collect();
        actions.extend(self.kick());
        actions
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Press(symbol) => self.press(symbol),
            AppEvent::EndOfCharacter => self.end_of_character(),
            AppEvent::EndOfWord => self.end_of_word(),
            AppEvent::WatchdogExpired => {
                tracing::warn!("watchdog expired");
                vec![AppAction::Restart]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char('.') => self.press(Symbol::Dot),
            KeyInput::Char('-') => self.press(Symbol::Dash),
            KeyInput::Char(' ' | '/') => {
                if self.decoder.pending().is_empty() {
                    vec![]
                } else {
                    self.end_of_character()
                }
            },
            KeyInput::Enter => {
                let mut actions = Vec::new();
                if !self.decoder.pending().is_empty() {
                    actions.extend(self.end_of_character());
                }
                if !self.answer.is_empty() {
                    actions.extend(self.end_of_word());
                }
                actions
            },
            KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Char(other) => {
                tracing::trace!(key = ?other, "ignoring key");
                vec![]
            },
        }
    }

    fn press(&mut self, symbol: Symbol) -> Vec<AppAction> {
        let mut actions = Vec::new();
        if self.decoder.press(symbol) {
            actions.push(AppAction::EchoSymbol(symbol));
        }
        actions.extend(self.kick());
        actions
    }

    fn end_of_character(&mut self) -> Vec<AppAction> {
        let glyph = self.decoder.complete_character(&mut self.answer);
        let mut actions = vec![AppAction::EchoGlyph(glyph)];
        actions.extend(self.kick());
        actions
    }

    fn end_of_word(&mut self) -> Vec<AppAction> {
        let mut actions: Vec<_> = self.kick().into_iter().collect();
        let outcome = self.game.handle_answer(self.answer.as_slice());
        actions.extend(outcome.into_iter().map(AppAction::from));

        self.answer.clear();
        self.decoder.reset();
        actions
    }

    fn kick(&self) -> Option<AppAction> {
        self.config.watchdog.map(AppAction::KickWatchdog)
    }

    /// Game state machine.
    pub fn game(&self) -> &GameStateMachine<E> {
        &self.game
    }

    /// Decoder holding the character being keyed.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Glyphs decoded since the last judged answer.
    pub fn answer(&self) -> &AnswerSequence {
        &self.answer
    }

    /// Active configuration.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}

impl From<GameAction> for AppAction {
    fn from(action: GameAction) -> Self {
        match action {
            GameAction::Report(report) => Self::Report(report),
            GameAction::Status(color) => Self::Status(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use morse_core::{GameState, Level, Report, StatusColor};

    use super::*;
    use crate::WatchdogConfig;

    /// Always draws challenge 0.
    #[derive(Clone)]
    struct ZeroEnv;

    impl Environment for ZeroEnv {
        fn random_bytes(&self, buffer: &mut [u8]) {
            buffer.fill(0);
        }
    }

    fn app() -> App<ZeroEnv> {
        App::new(ZeroEnv, TrainerConfig::default())
    }

    fn kick() -> AppAction {
        AppAction::KickWatchdog(WatchdogConfig::default())
    }

    fn type_line(app: &mut App<ZeroEnv>, line: &str) -> Vec<AppAction> {
        let mut actions = Vec::new();
        for c in line.chars() {
            actions.extend(app.handle(AppEvent::Key(KeyInput::Char(c))));
        }
        actions.extend(app.handle(AppEvent::Key(KeyInput::Enter)));
        actions
    }

    #[test]
    fn start_shows_welcome() {
        let app = app();
        assert_eq!(app.start(), vec![
            AppAction::Report(Report::Welcome),
            AppAction::Status(StatusColor::Blue),
            kick()
        ]);
    }

    #[test]
    fn press_echoes_and_kicks() {
        let mut app = app();
        let actions = app.handle(AppEvent::Press(Symbol::Dash));
        assert_eq!(actions, vec![AppAction::EchoSymbol(Symbol::Dash), kick()]);
        assert_eq!(app.decoder().pending().to_string(), "-");
    }

    #[test]
    fn dropped_press_still_kicks() {
        let mut app = app();
        for _ in 0..17 {
            app.handle(AppEvent::Press(Symbol::Dot));
        }
        let actions = app.handle(AppEvent::Press(Symbol::Dot));
        assert_eq!(actions, vec![kick()]);
    }

    #[test]
    fn end_of_character_decodes() {
        let mut app = app();
        app.handle(AppEvent::Press(Symbol::Dot));
        app.handle(AppEvent::Press(Symbol::Dash));
        let actions = app.handle(AppEvent::EndOfCharacter);

        assert_eq!(actions, vec![AppAction::EchoGlyph('A'), kick()]);
        assert_eq!(app.answer().to_string(), "A");
        assert!(app.decoder().pending().is_empty());
    }

    #[test]
    fn end_of_word_selects_level() {
        let mut app = app();
        // "1" is .----
        let actions = type_line(&mut app, ".----");

        assert_eq!(app.game().state().level(), Level::Level1);
        assert!(app.answer().is_empty());
        assert!(actions.contains(&AppAction::Status(StatusColor::Green)));
        assert!(actions.iter().any(|a| matches!(a, AppAction::Report(Report::Prompt(_)))));
    }

    #[test]
    fn end_of_word_discards_unfinished_character() {
        let mut app = App::with_game(
            GameStateMachine::with_state(ZeroEnv, GameState::playing(Level::Level1, 3, 0)),
            TrainerConfig::default(),
        );
        app.handle(AppEvent::Press(Symbol::Dot));
        app.handle(AppEvent::Press(Symbol::Dash));
        app.handle(AppEvent::EndOfCharacter);
        app.handle(AppEvent::Press(Symbol::Dash));
        app.handle(AppEvent::EndOfWord);

        // Challenge 0 is 'A'; the trailing dash never became a character
        assert_eq!(app.game().state().streak(), 1);
        assert!(app.decoder().pending().is_empty());
    }

    #[test]
    fn keyed_answer_is_judged() {
        let mut app = App::with_game(
            GameStateMachine::with_state(ZeroEnv, GameState::playing(Level::Level3, 3, 0)),
            TrainerConfig::default(),
        );
        // Word 0 is WIND
        let actions = type_line(&mut app, ".-- .. -. -..");

        assert!(actions.contains(&AppAction::Report(Report::Correct)));
        assert_eq!(app.game().state().streak(), 1);
    }

    #[test]
    fn enter_without_input_is_ignored() {
        let mut app = App::with_game(
            GameStateMachine::with_state(ZeroEnv, GameState::playing(Level::Level2, 3, 0)),
            TrainerConfig::default(),
        );
        assert!(app.handle(AppEvent::Key(KeyInput::Enter)).is_empty());
        assert!(app.handle(AppEvent::Key(KeyInput::Char(' '))).is_empty());
        assert_eq!(app.game().state().lives(), 3);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut app = app();
        assert!(app.handle(AppEvent::Key(KeyInput::Char('x'))).is_empty());
        assert!(app.decoder().pending().is_empty());
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), vec![AppAction::Quit]);
    }

    #[test]
    fn watchdog_expiry_requests_restart() {
        let mut app = app();
        assert_eq!(app.handle(AppEvent::WatchdogExpired), vec![AppAction::Restart]);
    }

    #[test]
    fn disabled_watchdog_is_never_kicked() {
        let mut app = App::new(ZeroEnv, TrainerConfig::without_watchdog());
        let actions = type_line(&mut app, "..---");
        assert!(!actions.iter().any(|a| matches!(a, AppAction::KickWatchdog(_))));
        assert_eq!(app.game().state().level(), Level::Level2);
    }
}
