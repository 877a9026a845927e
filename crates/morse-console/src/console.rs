//! Console driver for the trainer.
//!
//! Implements the [`Driver`] trait with crossterm key events for input and a
//! plain writer for output. The watchdog is a tokio deadline raced against
//! the next key press.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use futures::{Stream, StreamExt};
use morse_app::{AppEvent, Driver, KeyInput, WatchdogConfig};
use morse_core::{Report, StatusColor, Symbol};
use thiserror::Error;
use tokio::time::Instant;

use crate::output;

/// Console driver errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Console driver implementing the [`Driver`] trait.
///
/// Generic over the key event stream and the output writer so tests can run
/// it without a terminal.
pub struct ConsoleDriver<S, W> {
    input: S,
    out: W,
    deadline: Option<Instant>,
    raw_mode: bool,
}

impl ConsoleDriver<EventStream, Stdout> {
    /// Driver on the process terminal. Enables raw mode until dropped.
    pub fn stdio() -> Result<Self, ConsoleError> {
        enable_raw_mode()?;
        Ok(Self { input: EventStream::new(), out: stdout(), deadline: None, raw_mode: true })
    }
}

impl<S, W> ConsoleDriver<S, W> {
    /// Driver over an arbitrary event stream and writer.
    pub fn new(input: S, out: W) -> Self {
        Self { input, out, deadline: None, raw_mode: false }
    }

    /// Output written so far.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Convert a crossterm key event to `KeyInput`.
    ///
    /// Ctrl-C quits like Esc, since raw mode swallows the signal.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyInput::Esc)
            },
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            _ => None,
        }
    }
}

impl<S, W> ConsoleDriver<S, W>
where
    W: Write,
{
    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Resolves at the watchdog deadline, or never if the watchdog is disarmed.
async fn expiry(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

impl<S, W> Driver for ConsoleDriver<S, W>
where
    S: Stream<Item = io::Result<Event>> + Unpin + Send,
    W: Write + Send,
{
    type Error = ConsoleError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                maybe_event = self.input.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if let Some(input) = Self::convert_key(key) {
                                return Ok(Some(AppEvent::Key(input)));
                            }
                        },
                        Some(Ok(_)) => {},
                        Some(Err(e)) => return Err(ConsoleError::Io(e)),
                        None => return Ok(None),
                    }
                }

                () = expiry(self.deadline) => {
                    self.deadline = None;
                    return Ok(Some(AppEvent::WatchdogExpired));
                }
            }
        }
    }

    fn report(&mut self, report: &Report) -> Result<(), Self::Error> {
        self.write(&output::report_text(report))
    }

    fn set_status(&mut self, color: StatusColor) -> Result<(), Self::Error> {
        self.write(&output::status_text(color))
    }

    fn echo_symbol(&mut self, symbol: Symbol) -> Result<(), Self::Error> {
        self.write(&symbol.to_string())
    }

    fn echo_glyph(&mut self, glyph: char) -> Result<(), Self::Error> {
        self.write(&output::glyph_text(glyph))
    }

    fn kick_watchdog(&mut self, config: WatchdogConfig) {
        // Nothing halts a console process for inspection, so pause_on_debug
        // has no effect here.
        self.deadline = Some(Instant::now() + config.timeout);
    }

    fn stop(&mut self) {
        self.deadline = None;
        if self.raw_mode {
            self.raw_mode = false;
            if let Err(error) = disable_raw_mode() {
                tracing::warn!(%error, "failed to leave raw mode");
            }
        }
    }
}

impl<S, W> Drop for ConsoleDriver<S, W> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyEventState, KeyModifiers};
    use futures::stream;

    use super::*;

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn driver(
        events: Vec<io::Result<Event>>,
    ) -> ConsoleDriver<stream::Iter<std::vec::IntoIter<io::Result<Event>>>, Vec<u8>> {
        ConsoleDriver::new(stream::iter(events), Vec::new())
    }

    #[tokio::test]
    async fn keys_become_events() {
        let mut driver = driver(vec![
            key(KeyCode::Char('.')),
            Ok(Event::FocusGained),
            key(KeyCode::Enter),
            key(KeyCode::Tab),
            key(KeyCode::Esc),
        ]);

        let mut events = Vec::new();
        while let Some(event) = driver.poll_event().await.unwrap() {
            events.push(event);
        }
        assert_eq!(events, vec![
            AppEvent::Key(KeyInput::Char('.')),
            AppEvent::Key(KeyInput::Enter),
            AppEvent::Key(KeyInput::Esc),
        ]);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ConsoleDriver::<(), ()>::convert_key(key), Some(KeyInput::Esc));
    }

    #[tokio::test]
    async fn idle_input_expires_watchdog() {
        let mut driver = ConsoleDriver::new(stream::pending::<io::Result<Event>>(), Vec::new());
        driver.kick_watchdog(WatchdogConfig {
            timeout: Duration::from_millis(10),
            pause_on_debug: true,
        });

        assert_eq!(driver.poll_event().await.unwrap(), Some(AppEvent::WatchdogExpired));
        assert!(driver.deadline.is_none(), "expiry disarms the watchdog");
    }

    #[tokio::test]
    async fn input_beats_a_distant_deadline() {
        let mut driver = driver(vec![key(KeyCode::Char('-'))]);
        driver.kick_watchdog(WatchdogConfig::default());

        assert_eq!(driver.poll_event().await.unwrap(), Some(AppEvent::Key(KeyInput::Char('-'))));
    }

    #[test]
    fn output_is_written() {
        let mut driver = driver(vec![]);
        driver.echo_symbol(Symbol::Dot).unwrap();
        driver.echo_symbol(Symbol::Dash).unwrap();
        driver.echo_glyph('A').unwrap();
        driver.set_status(StatusColor::Green).unwrap();

        let text = String::from_utf8(driver.output().clone()).unwrap();
        assert_eq!(text, ".- => A\r\n[status: green #00FF00]\r\n");
    }
}
