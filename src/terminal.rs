use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal;
use crossterm::ExecutableCommand;
use log::{debug, warn};

/// Keeps the terminal in raw mode with the cursor hidden for as long as it
/// lives. Dropping it restores the previous mode on every exit path.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard { _private: () };
        io::stdout().execute(Hide)?;
        debug!("raw mode on");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.execute(Show).and_then(|out| out.flush()) {
            warn!("failed to show cursor: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to leave raw mode: {e}");
        }
        debug!("raw mode off");
    }
}
