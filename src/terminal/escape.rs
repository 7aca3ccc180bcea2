//! ANSI escape sequence constants and helpers
//!
//! Byte-exact sequences the editor writes to the terminal, plus crossterm
//! commands wrapping them so callers can `queue!` them like any other command.

use std::fmt;

use crossterm::Command;

// === Screen Control ===

/// Clear entire screen (ED 2)
#[allow(dead_code)]
pub const CLEAR_SCREEN: &str = "\x1b[2J";

// === Cursor Control ===

/// Move cursor to home position (top-left), default CUP arguments
pub const CURSOR_HOME: &str = "\x1b[H";

/// Full refresh: clear, then home
#[allow(dead_code)]
pub const REFRESH: &str = "\x1b[2J\x1b[H";

/// Moves the cursor to row 1, column 1 using the short `ESC [ H` form.
///
/// `crossterm::cursor::MoveTo(0, 0)` spells out both coordinates
/// (`ESC [ 1 ; 1 H`), which is a different byte string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorHome;

impl Command for CursorHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str(CURSOR_HOME)
    }
}
