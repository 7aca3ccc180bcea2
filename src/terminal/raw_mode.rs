//! Raw mode session
//!
//! [`RawMode`] captures the terminal's original attributes, installs a raw
//! derivation of them and puts the original back when it goes out of scope.
//! The original snapshot is never modified and is the only value ever
//! reinstalled.

use std::time::Duration;

use nix::sys::termios::{
    ControlFlags, InputFlags, LocalFlags, OutputFlags, SpecialCharacterIndices, Termios,
};

use crate::error::EditorError;
use crate::terminal::device::TerminalDevice;

/// VTIME counts in tenths of a second
const TICK_MS: u128 = 100;

/// Convert a polling interval into VTIME ticks.
///
/// Rounds up and clamps to 1..=255: zero ticks with VMIN = 0 would make every
/// read return immediately.
pub fn read_timeout_ticks(timeout: Duration) -> u8 {
    let ticks = timeout.as_millis().div_ceil(TICK_MS);
    ticks.clamp(1, u8::MAX as u128) as u8
}

/// Derive raw attributes in place.
///
/// Only the listed flags and the VMIN/VTIME slots change.
pub fn make_raw(attrs: &mut Termios, ticks: u8) {
    attrs.input_flags &= !(InputFlags::BRKINT
        | InputFlags::INPCK
        | InputFlags::ISTRIP
        | InputFlags::ICRNL
        | InputFlags::IXON);
    attrs.output_flags &= !OutputFlags::OPOST;
    attrs.control_flags |= ControlFlags::CS8;
    attrs.local_flags &=
        !(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::ISIG | LocalFlags::IEXTEN);

    // Return as soon as any byte is available, or after `ticks` with none
    attrs.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
    attrs.control_chars[SpecialCharacterIndices::VTIME as usize] = ticks;
}

/// A terminal held in raw mode.
///
/// Restoration is tied to scope exit, so every return path out of the owning
/// frame (normal quit, a propagated fatal error, or unwinding) reinstalls
/// the original attributes exactly once.
pub struct RawMode<D: TerminalDevice> {
    device: D,
    original: Termios,
    restored: bool,
}

impl<D: TerminalDevice> RawMode<D> {
    /// Capture the current attributes and switch the terminal to raw mode.
    ///
    /// If applying the raw attributes fails, the original attributes are
    /// reinstalled before the error is returned.
    pub fn enable(device: D, timeout: Duration) -> Result<Self, EditorError> {
        let original = device
            .get_attributes()
            .map_err(|source| EditorError::TerminalConfiguration {
                operation: "tcgetattr",
                source,
            })?;
        log::debug!("captured original terminal attributes");

        // Armed before the apply so a failed apply still restores on drop
        let session = Self {
            device,
            original,
            restored: false,
        };

        let mut raw = session.original.clone();
        let ticks = read_timeout_ticks(timeout);
        make_raw(&mut raw, ticks);

        session
            .device
            .set_attributes(&raw)
            .map_err(|source| EditorError::TerminalConfiguration {
                operation: "tcsetattr",
                source,
            })?;
        log::debug!("raw mode enabled (VTIME={})", ticks);

        Ok(session)
    }

    /// The attributes captured at startup
    #[allow(dead_code)]
    pub fn original(&self) -> &Termios {
        &self.original
    }

    /// Reinstall the original attributes. Best-effort; later calls are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        match self.device.set_attributes(&self.original) {
            Ok(()) => log::debug!("terminal attributes restored"),
            Err(e) => log::warn!("failed to restore terminal attributes: {}", e),
        }
    }
}

impl<D: TerminalDevice> Drop for RawMode<D> {
    fn drop(&mut self) {
        self.restore();
    }
}
