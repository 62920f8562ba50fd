//! Command-line interface.
//!
//! Flags are handled before the terminal is touched. Everything except
//! [`CliCommand::Run`] prints to stdout and exits.
//!
//! ```ignore
//! use tensorwalk::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // continue to the TUI
//! ```

pub mod args;
pub mod outline;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::VERSION;

use color_eyre::Result;

use crate::content::tutorial_outline;

/// Run a non-interactive command.
///
/// Returns `None` for [`CliCommand::Run`], which the caller handles.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version::version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::List { json } => Some(print_outline(*json)),
        CliCommand::Run(_) => None,
    }
}

fn print_outline(json: bool) -> Result<()> {
    let outline = tutorial_outline()?;
    if json {
        println!("{}", outline::outline_json(&outline)?);
    } else {
        print!("{}", outline::outline_text(&outline));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_none() {
        let result = run_cli_command(&CliCommand::Run(RunOptions::default()));
        assert!(result.is_none());
    }

    #[test]
    fn test_list_succeeds() {
        let result = run_cli_command(&CliCommand::List { json: true });
        assert!(matches!(result, Some(Ok(()))));
    }
}
