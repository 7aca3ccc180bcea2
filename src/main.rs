mod app;
mod config;
mod error;
mod input;
mod logging;
mod terminal;


use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::Duration;

use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::app::Editor;
use crate::config::Config;
use crate::error::EditorError;
use crate::terminal::escape::CursorHome;
use crate::terminal::{RawMode, StdinDevice, TerminalDevice};

/// Exit status for any fatal error
const EXIT_FATAL: u8 = 1;

/// Hold `device` in raw mode while the editor runs over `input`/`output`.
///
/// The raw mode guard lives in this frame, so the terminal is restored before
/// control returns to the caller, whichever way the session ends.
fn run_session<D: TerminalDevice>(
    device: D,
    read_timeout: Duration,
    input: impl Read,
    output: impl Write,
) -> Result<(), EditorError> {
    let _raw_mode = RawMode::enable(device, read_timeout)?;
    let mut editor = Editor::new(input, output);
    editor.run()
}

/// Run one editor session on the controlling terminal
fn run(config: &Config) -> Result<(), EditorError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        StdinDevice::new(),
        config.read_timeout(),
        stdin.lock(),
        stdout.lock(),
    )
}

/// Leave a clean screen, then print the error like `perror` would.
///
/// Returns the process exit status.
fn report_fatal(err: &EditorError, out: &mut impl Write, err_out: &mut impl Write) -> u8 {
    // Best-effort: the output stream may be the thing that failed
    let _ = queue!(out, Clear(ClearType::All), CursorHome);
    let _ = out.flush();
    let _ = writeln!(err_out, "{}", err);
    EXIT_FATAL
}

fn main() -> ExitCode {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}. Using defaults.", e);
        Config::default()
    });

    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: {:#}", e);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("fatal error in {}: {}", e.operation(), e);
            let code = report_fatal(&e, &mut io::stdout(), &mut io::stderr());
            ExitCode::from(code)
        }
    }
}
