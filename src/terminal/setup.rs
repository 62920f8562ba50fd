//! Raw escape-sequence plumbing for entering and leaving the tutorial screen.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Alternate screen, mouse capture, hidden cursor, cleared.
pub fn enter_tutorial_screen<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableMouseCapture,
        Hide,
        Clear(ClearType::All)
    )
}

/// Undo [`enter_tutorial_screen`] and raw mode. Never fails; every step is
/// attempted even if an earlier one errors.
pub fn leave_tutorial_screen<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout without a session at hand (panics, failed startup).
pub fn restore_stdout() {
    leave_tutorial_screen(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_writes_escape_sequences() {
        let mut buffer = Vec::new();
        enter_tutorial_screen(&mut buffer).unwrap();
        assert!(!buffer.is_empty());
        assert!(buffer.starts_with(b"\x1b["));
    }

    #[test]
    fn test_leave_is_safe_without_raw_mode() {
        let mut buffer = Vec::new();
        leave_tutorial_screen(&mut buffer);
        leave_tutorial_screen(&mut buffer);
        assert!(!buffer.is_empty());
    }
}
