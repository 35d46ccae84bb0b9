//! Input handling for the Skillet TUI.
//!
//! A dedicated reader thread pumps crossterm events into a channel so the
//! render loop never blocks on the terminal; key events are mapped to
//! high-level [`Action`]s here, and every game decision stays in the engine.

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use skillet_engine::HeatLevel;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness

/// What the player asked for. The engine decides whether it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    ToggleIngredient,
    SetHeat(HeatLevel),
    Cook,
    Serve,
    Reset,
    Quit,
}

/// Terminal event reader running on its own thread.
///
/// The thread stops at the first failed send after the receiver is dropped;
/// it otherwise lives for the process.
pub struct InputPump {
    receiver: mpsc::Receiver<Event>,
}

impl InputPump {
    #[must_use]
    pub fn spawn() -> Self {
        let (tx, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            loop {
                match event::poll(INPUT_POLL_TIMEOUT) {
                    Ok(true) => match event::read() {
                        Ok(ev) => {
                            if tx.send(ev).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(%e, "Failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        tracing::warn!(%e, "Failed to poll terminal events");
                        break;
                    }
                }
            }
        });
        Self { receiver }
    }

    /// Drain all pending actions without blocking.
    pub fn drain_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            if let Event::Key(key) = event
                && let Some(action) = map_key(key)
            {
                actions.push(action);
            }
        }
        actions
    }
}

/// Map a key press to an [`Action`]. Release/repeat events and unbound keys
/// map to nothing.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorRight),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleIngredient),
        KeyCode::Char('1') => Some(Action::SetHeat(HeatLevel::Low)),
        KeyCode::Char('2') => Some(Action::SetHeat(HeatLevel::Medium)),
        KeyCode::Char('3') => Some(Action::SetHeat(HeatLevel::High)),
        KeyCode::Char('c') => Some(Action::Cook),
        KeyCode::Char('s') => Some(Action::Serve),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, map_key};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use skillet_engine::HeatLevel;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_keys_map_to_cursor_actions() {
        assert_eq!(map_key(press(KeyCode::Left)), Some(Action::CursorLeft));
        assert_eq!(map_key(press(KeyCode::Char('l'))), Some(Action::CursorRight));
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::CursorUp));
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(Action::CursorDown));
    }

    #[test]
    fn digits_set_heat() {
        assert_eq!(
            map_key(press(KeyCode::Char('1'))),
            Some(Action::SetHeat(HeatLevel::Low))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('3'))),
            Some(Action::SetHeat(HeatLevel::High))
        );
    }

    #[test]
    fn game_keys_map_to_game_actions() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::ToggleIngredient));
        assert_eq!(map_key(press(KeyCode::Char('c'))), Some(Action::Cook));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(Action::Serve));
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }
}
