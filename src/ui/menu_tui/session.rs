use std::io;
use std::panic;

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Raw mode and alternate screen, held for the lifetime of the value
///
/// Dropping the session restores the terminal. A panic hook does the same,
/// since release builds abort on panic and never run `Drop`.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            restore_terminal();
            return Err(e).context("Failed to enter alternate screen");
        }

        install_panic_hook();
        log::debug!("Terminal session acquired");

        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        log::debug!("Terminal session released");
    }
}

/// Put the terminal back into cooked mode on the main screen
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}
