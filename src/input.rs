//! Terminal events → game inputs.
//!
//! The game logic never sees crossterm types; `translate` maps each raw
//! event to at most one `Input`.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    /// Keyboard shortcut for the Play button.
    Play,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Press(Key),
    Release(Key),
    Click { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
    Quit,
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Key::Play),
        _ => None,
    }
}

pub fn translate(event: &Event) -> Option<Input> {
    match *event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            let quit = matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
                || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL));
            match kind {
                KeyEventKind::Press if quit => Some(Input::Quit),
                KeyEventKind::Press => map_key(code).map(Input::Press),
                // Auto-repeat keeps a direction held but never re-fires.
                KeyEventKind::Repeat => match map_key(code) {
                    Some(key @ (Key::Left | Key::Right)) => Some(Input::Press(key)),
                    _ => None,
                },
                KeyEventKind::Release => map_key(code).map(Input::Release),
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Input::Click { column, row }),
        Event::Resize(width, height) => Some(Input::Resize { width, height }),
        _ => None,
    }
}

/// Stands in for key releases on terminals that never report them.
///
/// Every press or repeat of a direction key refreshes its timestamp; a key
/// silent for longer than `window` frames counts as released. Keep the
/// window short so a tap stops the ship quickly.
///
/// Auto-repeat on those terminals arrives as plain presses, so a Fire
/// press within `fire_window` frames of the previous one is swallowed and
/// pushes the window forward. A held Space therefore fires once.
#[derive(Debug, Default)]
pub struct KeyHold {
    window: u64,
    fire_window: u64,
    last_seen: HashMap<Key, u64>,
    last_fire: Option<u64>,
}

impl KeyHold {
    pub fn new(window: u64, fire_window: u64) -> Self {
        KeyHold {
            window,
            fire_window,
            last_seen: HashMap::new(),
            last_fire: None,
        }
    }

    /// Record `input` seen at `frame`. Returns false if it is an
    /// auto-repeated Fire that should be dropped.
    pub fn observe(&mut self, input: &Input, frame: u64) -> bool {
        match *input {
            Input::Press(key @ (Key::Left | Key::Right)) => {
                self.last_seen.insert(key, frame);
                true
            }
            Input::Press(Key::Fire) => {
                let repeat = self
                    .last_fire
                    .is_some_and(|last| frame.saturating_sub(last) <= self.fire_window);
                self.last_fire = Some(frame);
                !repeat
            }
            Input::Release(Key::Fire) => {
                self.last_fire = None;
                true
            }
            Input::Release(key) => {
                self.last_seen.remove(&key);
                true
            }
            _ => true,
        }
    }

    /// Keys whose hold window has lapsed at `frame`; they are forgotten.
    pub fn expire(&mut self, frame: u64) -> Vec<Input> {
        let window = self.window;
        let mut expired: Vec<Key> = self
            .last_seen
            .iter()
            .filter(|(_, &last)| frame.saturating_sub(last) > window)
            .map(|(&key, _)| key)
            .collect();
        expired.sort_by_key(|k| *k as u8);
        for key in &expired {
            self.last_seen.remove(key);
        }
        expired.into_iter().map(Input::Release).collect()
    }
}
