//! Terminal handling module
//!
//! Groups all terminal-related functionality:
//! - ANSI escape sequences
//! - Attribute access on the controlling terminal
//! - Raw mode lifecycle

pub mod device;
pub mod escape;
pub mod raw_mode;

pub use device::{StdinDevice, TerminalDevice};
pub use raw_mode::RawMode;
