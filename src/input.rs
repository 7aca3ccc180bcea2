//! Input handling module
//!
//! Reads single bytes from a raw-mode terminal and maps them to editor
//! actions.

use std::io::{ErrorKind, Read};

use crate::error::EditorError;

/// Byte produced by Ctrl + `k`: the key's ASCII code with the top three bits cleared
#[inline]
pub const fn ctrl_key(k: u8) -> u8 {
    k & 0x1f
}

/// Ctrl+Q (0x11) ends the session
pub const QUIT: u8 = ctrl_key(b'q');

/// What the main loop should do after a keypress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Block until one byte arrives.
///
/// A read returning zero bytes, or `WouldBlock`, means the VTIME interval
/// elapsed with nothing typed, so the read is simply issued again.
pub fn read_key(input: &mut impl Read) -> Result<u8, EditorError> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(1) => {
                log::trace!("key 0x{:02x}", buf[0]);
                return Ok(buf[0]);
            }
            Ok(_) => continue,
            Err(e) if e.kind() == ErrorKind::WouldBlock => continue,
            Err(e) => return Err(EditorError::InputRead(e)),
        }
    }
}

/// Read one key and dispatch it
pub fn process_key_press(input: &mut impl Read) -> Result<KeyAction, EditorError> {
    let key = read_key(input)?;
    Ok(match key {
        QUIT => KeyAction::Quit,
        _ => KeyAction::Continue,
    })
}
