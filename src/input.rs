#![warn(clippy::all, clippy::pedantic)]

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};

// How long a movement key counts as held after its last press or repeat
pub const KEY_HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Jump,
    /// Number row key, used to pick a stage (1-based)
    Digit(u8),
}

/// Platform-neutral input event, positions in game pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    PointerMoved { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    CloseRequested,
}

/// Everything the game needs to know about input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub left_held: bool,
    pub right_held: bool,
}

impl FrameInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn key(key: Key) -> Self {
        Self::with_events([InputEvent::Key(key)])
    }
}

/// Tracks movement keys across frames.
///
/// Most terminals never report key releases, so a key counts as held for a
/// short window after its last press or auto-repeat.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    left: Option<Instant>,
    right: Option<Instant>,
}

impl HeldKeys {
    pub fn press(&mut self, key: Key, now: Instant) {
        match key {
            Key::Left => self.left = Some(now),
            Key::Right => self.right = Some(now),
            _ => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left = None,
            Key::Right => self.right = None,
            _ => {}
        }
    }

    #[must_use]
    pub fn left_held(&self, now: Instant) -> bool {
        is_recent(self.left, now)
    }

    #[must_use]
    pub fn right_held(&self, now: Instant) -> bool {
        is_recent(self.right, now)
    }
}

fn is_recent(pressed: Option<Instant>, now: Instant) -> bool {
    pressed.is_some_and(|at| now.saturating_duration_since(at) <= KEY_HOLD_WINDOW)
}

/// Maps a terminal key to a game key. Unknown keys map to `None`.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up | KeyCode::Char('w') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Key::Right),
        KeyCode::Enter => Some(Key::Confirm),
        KeyCode::Char(' ') => Some(Key::Jump),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Key::Digit),
        _ => None,
    }
}

/// Converts a terminal cell inside `field` into game coordinates (cell centre).
#[must_use]
pub fn cell_to_game(field: Rect, column: u16, row: u16) -> Option<(f32, f32)> {
    if field.width == 0
        || field.height == 0
        || column < field.x
        || row < field.y
        || column >= field.x + field.width
        || row >= field.y + field.height
    {
        return None;
    }

    let x = (f32::from(column - field.x) + 0.5) * SCREEN_WIDTH / f32::from(field.width);
    let y = (f32::from(row - field.y) + 0.5) * SCREEN_HEIGHT / f32::from(field.height);
    Some((x, y))
}

/// Translates one terminal event. `held` is updated for movement keys.
///
/// Events the game has no use for come back as `None`.
pub fn translate(
    event: &Event,
    field: Rect,
    held: &mut HeldKeys,
    now: Instant,
) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key, held, now),
        Event::Mouse(mouse) => translate_mouse(mouse, field),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, held: &mut HeldKeys, now: Instant) -> Option<InputEvent> {
    let quit = key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
    if quit && key.kind == KeyEventKind::Press {
        return Some(InputEvent::CloseRequested);
    }

    let mapped = map_key(key.code)?;
    match key.kind {
        KeyEventKind::Release => {
            held.release(mapped);
            None
        }
        KeyEventKind::Repeat => {
            // Repeats only keep movement alive; they never re-trigger menus
            held.press(mapped, now);
            None
        }
        KeyEventKind::Press => {
            held.press(mapped, now);
            Some(InputEvent::Key(mapped))
        }
    }
}

fn translate_mouse(mouse: &MouseEvent, field: Rect) -> Option<InputEvent> {
    let (x, y) = cell_to_game(field, mouse.column, mouse.row)?;
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            Some(InputEvent::PointerMoved { x, y })
        }
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown { x, y }),
        _ => None,
    }
}
