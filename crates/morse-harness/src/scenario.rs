//! Scripted players.
//!
//! A [`Script`] plays against a shadow [`App`] seeded like the one under test,
//! so it always knows the current challenge and can key right or wrong answers
//! on purpose. The recorded events can then be replayed through a
//! [`SimDriver`](crate::SimDriver) and the real [`morse_app::Runtime`].

use arbitrary::Arbitrary;
use morse_app::{App, AppAction, AppEvent, KeyInput, TrainerConfig};
use morse_core::{MorseTable, Symbol};

use crate::SimEnv;

/// Events that key `text` as one answer.
///
/// Glyphs are encoded with the standard table; glyphs it cannot encode key a
/// lone dot. Ends with a character boundary and a word boundary.
pub fn answer_events(text: &str) -> Vec<AppEvent> {
    let table = MorseTable::standard();
    let mut events = Vec::new();

    for glyph in text.chars() {
        let pattern = table.encode(glyph).unwrap_or(".");
        let presses = pattern.chars().filter_map(|c| Symbol::try_from(c).ok());
        events.extend(presses.map(AppEvent::Press));
        events.push(AppEvent::EndOfCharacter);
    }
    events.push(AppEvent::EndOfWord);
    events
}

/// Keystrokes that type `text` as one answer on a keyboard frontend.
pub fn answer_keys(text: &str) -> Vec<AppEvent> {
    let table = MorseTable::standard();
    let mut keys = Vec::new();

    for glyph in text.chars() {
        let pattern = table.encode(glyph).unwrap_or(".");
        keys.extend(pattern.chars().map(|c| AppEvent::Key(KeyInput::Char(c))));
        keys.push(AppEvent::Key(KeyInput::Char(' ')));
    }
    keys.push(AppEvent::Key(KeyInput::Enter));
    keys
}

/// A single scripted step, generated by fuzzers and property tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// One classified press.
    Press(bool),
    /// Close the current character.
    EndOfCharacter,
    /// Close the current answer.
    EndOfWord,
    /// Raw keystroke.
    Key(u8),
    /// Enter key.
    Enter,
    /// Key the current challenge correctly.
    AnswerCorrectly,
    /// Key a wrong answer to the current challenge.
    AnswerWrongly,
    /// Pick a level from the menu (`0` and `5..` are invalid picks).
    SelectLevel(u8),
    /// Let the watchdog expire.
    WatchdogExpired,
}

/// Scripted player tracking a shadow App.
pub struct Script {
    app: App<SimEnv>,
    env: SimEnv,
    config: TrainerConfig,
    events: Vec<AppEvent>,
}

impl Script {
    /// Start a script for an App seeded with `seed`.
    pub fn new(seed: u64, config: TrainerConfig) -> Self {
        let env = SimEnv::with_seed(seed);
        let app = App::new(env.clone(), config.clone());
        Self { app, env, config, events: Vec::new() }
    }

    /// Apply one event to the shadow App and record it.
    ///
    /// A restart request rebuilds the shadow App the same way the runtime
    /// rebuilds the real one.
    pub fn push(&mut self, event: AppEvent) -> Vec<AppAction> {
        self.events.push(event);
        let actions = self.app.handle(event);
        if actions.contains(&AppAction::Restart) {
            tracing::debug!(events = self.events.len(), "rebuilding shadow app after restart");
            self.app = App::new(self.env.clone(), self.config.clone());
        }
        actions
    }

    /// Apply several events, returning all resulting actions.
    pub fn push_all(&mut self, events: impl IntoIterator<Item = AppEvent>) -> Vec<AppAction> {
        events.into_iter().flat_map(|event| self.push(event)).collect()
    }

    /// Apply a scripted operation.
    pub fn apply(&mut self, operation: Operation) -> Vec<AppAction> {
        match operation {
            Operation::Press(dash) => {
                self.push(AppEvent::Press(if dash { Symbol::Dash } else { Symbol::Dot }))
            },
            Operation::EndOfCharacter => self.push(AppEvent::EndOfCharacter),
            Operation::EndOfWord => self.push(AppEvent::EndOfWord),
            Operation::Key(byte) => {
                let c = char::from(byte);
                if c.is_ascii_graphic() || c == ' ' {
                    self.push(AppEvent::Key(KeyInput::Char(c)))
                } else {
                    Vec::new()
                }
            },
            Operation::Enter => self.push(AppEvent::Key(KeyInput::Enter)),
            Operation::AnswerCorrectly => self.answer_correctly(),
            Operation::AnswerWrongly => self.answer_wrongly(),
            Operation::SelectLevel(level) => self.select_level(level),
            Operation::WatchdogExpired => self.push(AppEvent::WatchdogExpired),
        }
    }

    /// Key a level number as the answer.
    pub fn select_level(&mut self, level: u8) -> Vec<AppAction> {
        let digit = char::from(b'0' + level % 10);
        self.push_all(answer_events(&digit.to_string()))
    }

    /// Key the current challenge. Submits an empty answer while idle.
    pub fn answer_correctly(&mut self) -> Vec<AppAction> {
        let target = self.app.game().current_target().unwrap_or_default();
        self.push_all(answer_events(&target))
    }

    /// Key something that cannot match the current challenge.
    pub fn answer_wrongly(&mut self) -> Vec<AppAction> {
        let target = self.app.game().current_target().unwrap_or_default();
        let wrong = if target.starts_with('E') { "T" } else { "E" };
        self.push_all(answer_events(wrong))
    }

    /// Shadow App after every recorded event.
    pub fn app(&self) -> &App<SimEnv> {
        &self.app
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[AppEvent] {
        &self.events
    }

    /// Consume the script, returning its events.
    pub fn into_events(self) -> Vec<AppEvent> {
        self.events
    }
}
