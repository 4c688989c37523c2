//! Keyboard input normalization.
//!
//! Maps crossterm key events onto [`Key`] tokens. Escape-sequence decoding is
//! crossterm's job; anything without a mapping becomes [`Key::Unknown`].

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::menu::Key;

/// Convert a keyboard event to a menu key
pub fn key_to_token(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Key::Cancel,
            _ => Key::Unknown,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::First,
        KeyCode::End => Key::Last,
        KeyCode::Enter => Key::Confirm,
        KeyCode::Esc => Key::Cancel,
        KeyCode::Char(' ') | KeyCode::Char('x') => Key::Select,
        KeyCode::Char('s') | KeyCode::Char('f') => Key::Search,
        KeyCode::Char('a') => Key::SelectAll,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Unknown,
    }
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until one key press arrives.
///
/// Raw mode is held only while waiting, so output between reads behaves like
/// ordinary line output.
pub fn read_key() -> io::Result<Key> {
    let _raw = RawModeGuard::enable()?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(key_to_token(key));
        }
    }
}
