//! Terminal mode guard

use ratatui::crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Raw mode plus alternate screen, undone on drop
///
/// Dropping also happens on early `?` returns, so a failed setup never
/// leaves the shell in raw mode.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                log::error!("Failed to disable raw mode: {}", e);
            }
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}
