//! Terminal session with RAII restore.
//!
//! ```no_run
//! use tensorwalk::terminal::{install_panic_hook, TerminalSession};
//!
//! fn main() -> color_eyre::Result<()> {
//!     install_panic_hook();
//!     let mut session = TerminalSession::start()?;
//!     session.terminal().draw(|_frame| {})?;
//!     // raw mode and the alternate screen end when `session` drops
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{enter_tutorial_screen, leave_tutorial_screen, restore_stdout};

use std::io::{self, Stdout};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal for the lifetime of the tutorial.
///
/// Starting a session enables raw mode, switches to the alternate screen and
/// turns on mouse capture. Dropping it undoes all three; [`Self::restore`]
/// does the same early and is idempotent.
pub struct TerminalSession {
    terminal: Tui,
    restored: bool,
}

impl TerminalSession {
    /// # Errors
    ///
    /// Fails if raw mode can't be enabled or the backend can't be created.
    /// Anything already switched on is switched back off first.
    pub fn start() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = enter_tutorial_screen(&mut stdout) {
            leave_tutorial_screen(&mut stdout);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_stdout();
                return Err(err.into());
            }
        };
        debug!("terminal session started");
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Leave the alternate screen and raw mode. Later calls do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tutorial_screen(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
        debug!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
