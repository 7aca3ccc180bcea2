//! Fatal error kinds
//!
//! Every variant ends the session: the top-level boundary in `main` refreshes
//! the screen, prints the message and exits with status 1. Display output
//! mirrors `perror`: the failing call, a colon, then the OS error text.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    /// Reading or applying terminal attributes failed
    #[error("{operation}: {source}")]
    TerminalConfiguration {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// The blocking read failed with something other than "no data yet"
    #[error("read: {0}")]
    InputRead(#[source] io::Error),

    /// Writing escape sequences to the output stream failed
    #[error("write: {0}")]
    OutputWrite(#[source] io::Error),
}

impl EditorError {
    /// Name of the failing operation, as shown before the colon
    pub fn operation(&self) -> &'static str {
        match self {
            EditorError::TerminalConfiguration { operation, .. } => *operation,
            EditorError::InputRead(_) => "read",
            EditorError::OutputWrite(_) => "write",
        }
    }
}
