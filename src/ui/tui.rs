use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, EventStream,
    KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::{FutureExt, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal and a reader task that turns crossterm events into [`Event`]s.
///
/// There is no tick: the main loop redraws after actions and at timer deadlines.
pub struct TuiRunner {
    terminal: Tui,
    events: UnboundedReceiver<Event>,
    events_tx: UnboundedSender<Event>,
    reader: Option<JoinHandle<()>>,
    shutdown: CancellationToken,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (events_tx, events) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            events,
            events_tx,
            reader: None,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        self.spawn_reader();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stop_reader();
        if crossterm::terminal::is_raw_mode_enabled()? {
            execute!(stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
            disable_raw_mode()?;
        }
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn spawn_reader(&mut self) {
        let tx = self.events_tx.clone();
        let shutdown = self.shutdown.clone();

        self.reader = Some(tokio::spawn(async move {
            let mut stream = EventStream::new();
            let _ = tx.send(Event::Init);

            loop {
                let next = tokio::select! {
                    _ = shutdown.cancelled() => break,
                    next = stream.next().fuse() => next,
                };

                let event = match next {
                    Some(Ok(raw)) => match translate(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        break;
                    }
                    None => break,
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_reader(&mut self) {
        self.shutdown.cancel();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.events.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Key releases, mouse and focus events are dropped.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            Some(Event::Key(key))
        }
        CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};
    use rstest::rstest;

    fn key(kind: KeyEventKind) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('y'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[rstest]
    #[case(KeyEventKind::Press, true)]
    #[case(KeyEventKind::Repeat, true)]
    #[case(KeyEventKind::Release, false)]
    fn only_press_and_repeat_keys_pass(#[case] kind: KeyEventKind, #[case] forwarded: bool) {
        assert_eq!(translate(key(kind)).is_some(), forwarded);
    }

    #[test]
    fn paste_and_resize_are_forwarded() {
        assert!(matches!(
            translate(CrosstermEvent::Paste("a|b".to_string())),
            Some(Event::Paste(text)) if text == "a|b"
        ));
        assert!(matches!(
            translate(CrosstermEvent::Resize(120, 40)),
            Some(Event::Resize(120, 40))
        ));
    }

    #[test]
    fn focus_changes_are_dropped() {
        assert!(translate(CrosstermEvent::FocusGained).is_none());
    }
}
