//! Quill editor loop
//!
//! Architecture:
//! - Every iteration wipes the screen and homes the cursor
//! - Then blocks for one key (bounded by the raw-mode VTIME interval)
//! - Ctrl+Q ends the loop; every other key is ignored for now

use std::io::{Read, Write};

use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::error::EditorError;
use crate::input::{self, KeyAction};
use crate::terminal::escape::CursorHome;

pub struct Editor<R: Read, W: Write> {
    input: R,
    output: W,
}

impl<R: Read, W: Write> Editor<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Clear the whole screen, then move the cursor to row 1, column 1
    pub fn refresh_screen(&mut self) -> Result<(), EditorError> {
        queue!(self.output, Clear(ClearType::All), CursorHome).map_err(EditorError::OutputWrite)?;
        self.output.flush().map_err(EditorError::OutputWrite)
    }

    pub fn process_key_press(&mut self) -> Result<KeyAction, EditorError> {
        input::process_key_press(&mut self.input)
    }

    /// Run until Ctrl+Q or a fatal error.
    ///
    /// Quitting does not redraw: the screen is left as the last refresh
    /// painted it.
    pub fn run(&mut self) -> Result<(), EditorError> {
        loop {
            self.refresh_screen()?;
            if self.process_key_press()? == KeyAction::Quit {
                log::debug!("quit requested");
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}


#[cfg(test)]
mod tests {
    use std::io;

    use super::testing::FailingOutput;
    use super::*;
    use crate::input::testing::{ScriptedInput, Step};
    use crate::terminal::escape::REFRESH;

    fn editor(steps: Vec<Step>) -> Editor<ScriptedInput, Vec<u8>> {
        Editor::new(ScriptedInput::new(steps), Vec::new())
    }

    #[test]
    fn test_refresh_writes_exact_bytes() {
        let mut editor = editor(vec![]);
        editor.refresh_screen().unwrap();
        let (_, out) = editor.into_parts();
        assert_eq!(out, vec![0x1b, 0x5b, 0x32, 0x4a, 0x1b, 0x5b, 0x48]);
    }

    #[test]
    fn test_refresh_repeats_identically() {
        let mut editor = editor(vec![]);
        for _ in 0..7 {
            editor.refresh_screen().unwrap();
        }
        let (_, out) = editor.into_parts();
        assert_eq!(out, REFRESH.repeat(7).into_bytes());
    }

    #[test]
    fn test_refresh_write_failure_is_fatal() {
        let mut editor = Editor::new(
            io::empty(),
            FailingOutput {
                ok_writes: 0,
                written: Vec::new(),
            },
        );
        let err = editor.refresh_screen().unwrap_err();
        assert!(matches!(err, EditorError::OutputWrite(_)));
    }

    #[test]
    fn test_process_key_press_writes_nothing() {
        let mut editor = editor(vec![Step::Byte(b'a'), Step::Byte(0x11)]);
        assert_eq!(editor.process_key_press().unwrap(), KeyAction::Continue);
        assert_eq!(editor.process_key_press().unwrap(), KeyAction::Quit);
        let (_, out) = editor.into_parts();
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_refreshes_once_per_key() {
        let mut editor = editor(vec![
            Step::Byte(b'h'),
            Step::Byte(b'i'),
            Step::Byte(b'\r'),
            Step::Byte(0x11),
        ]);
        editor.run().unwrap();
        let (input, out) = editor.into_parts();
        assert_eq!(out, REFRESH.repeat(4).into_bytes());
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_run_stops_reading_after_quit() {
        let mut editor = editor(vec![Step::Byte(0x11), Step::Byte(b'a')]);
        editor.run().unwrap();
        let (input, _) = editor.into_parts();
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_run_propagates_read_failure() {
        let mut editor = editor(vec![Step::Byte(b'a'), Step::Fail(io::ErrorKind::Other)]);
        let err = editor.run().unwrap_err();
        assert_eq!(err.operation(), "read");
        let (_, out) = editor.into_parts();
        assert_eq!(out, REFRESH.repeat(2).into_bytes());
    }
}
