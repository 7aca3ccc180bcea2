//! Access to the controlling terminal's attributes

use std::io;

use nix::sys::termios::{self, SetArg, Termios};

/// Something whose line-discipline settings can be read and replaced.
///
/// The real implementation talks to standard input; tests substitute an
/// in-memory device.
pub trait TerminalDevice {
    fn get_attributes(&self) -> io::Result<Termios>;

    /// Install `attrs`, discarding pending input (TCSAFLUSH)
    fn set_attributes(&self, attrs: &Termios) -> io::Result<()>;
}

/// The terminal attached to the process's standard input
pub struct StdinDevice {
    stdin: io::Stdin,
}

impl StdinDevice {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDevice for StdinDevice {
    fn get_attributes(&self) -> io::Result<Termios> {
        Ok(termios::tcgetattr(&self.stdin)?)
    }

    fn set_attributes(&self, attrs: &Termios) -> io::Result<()> {
        Ok(termios::tcsetattr(&self.stdin, SetArg::TCSAFLUSH, attrs)?)
    }
}
