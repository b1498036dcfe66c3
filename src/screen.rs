#![warn(clippy::all, clippy::pedantic)]

use std::io::{self, Write};

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};

/// Asks the terminal for press/repeat/release kinds.
///
/// Without these flags a held key arrives as a stream of presses.
pub const KEYBOARD_FLAGS: KeyboardEnhancementFlags = KeyboardEnhancementFlags::REPORT_EVENT_TYPES;

/// Switches to the alternate screen with mouse capture on
pub fn enter_screen<W: Write>(out: &mut W, enhanced_keys: bool) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    if enhanced_keys {
        execute!(out, PushKeyboardEnhancementFlags(KEYBOARD_FLAGS))?;
    }
    Ok(())
}

/// Undoes `enter_screen`
pub fn leave_screen<W: Write>(out: &mut W, enhanced_keys: bool) -> io::Result<()> {
    if enhanced_keys {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}
