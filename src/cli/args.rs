//! Command-line argument parsing.

use crate::error::{TutorError, TutorResult};

/// Options for an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `--start <id|index>`
    pub start: Option<String>,
    /// `--flat`: hide the chapter sidebar
    pub flat: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the outline and exit
    List { json: bool },
    /// Run the TUI (default)
    Run(RunOptions),
}

pub const USAGE: &str = "\
Usage: tensorwalk [OPTIONS]

Step-by-step terminal walkthrough from matrices to tensors.

Options:
  --start <STEP>   Open at a step id (e.g. rank) or zero-based index
  --flat           Hide the chapter sidebar
  --list           Print the outline and exit
  --json           With --list, print JSON
  -V, --version    Print version
  -h, --help       Print this help

Environment:
  TENSORWALK_START, TENSORWALK_FLAT, TENSORWALK_LOG,
  TENSORWALK_LOG_FILE, TENSORWALK_TICK_MS";

/// Parse command-line arguments. The first item is the program name.
///
/// `--version` and `--help` win over everything else.
///
/// # Examples
///
/// ```
/// use tensorwalk::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["tensorwalk".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> TutorResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut list = false;
    let mut json = false;

    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--list" => list = true,
            "--json" => json = true,
            "--flat" => options.flat = true,
            "--start" => {
                let value = args.next().ok_or_else(|| {
                    TutorError::InvalidArgument("--start requires a value".to_string())
                })?;
                options.start = Some(value);
            }
            other => match other.strip_prefix("--start=") {
                Some(value) if !value.is_empty() => options.start = Some(value.to_string()),
                _ => return Err(TutorError::InvalidArgument(other.to_string())),
            },
        }
    }

    if json && !list {
        return Err(TutorError::InvalidArgument(
            "--json is only valid with --list".to_string(),
        ));
    }
    if list {
        return Ok(CliCommand::List { json });
    }
    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> TutorResult<CliCommand> {
        let mut all = vec!["tensorwalk".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["--flat", "-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_start_forms() {
        let expected = CliCommand::Run(RunOptions {
            start: Some("rank".to_string()),
            flat: false,
        });
        assert_eq!(parse(&["--start", "rank"]).unwrap(), expected);
        assert_eq!(parse(&["--start=rank"]).unwrap(), expected);
    }

    #[test]
    fn test_parse_flat() {
        let cmd = parse(&["--flat", "--start", "3"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run(RunOptions {
                start: Some("3".to_string()),
                flat: true,
            })
        );
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse(&["--list"]).unwrap(), CliCommand::List { json: false });
        assert_eq!(
            parse(&["--json", "--list"]).unwrap(),
            CliCommand::List { json: true }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--start"]).unwrap_err().is_usage());
        assert!(parse(&["--start="]).unwrap_err().is_usage());
        assert!(parse(&["--json"]).unwrap_err().is_usage());
        assert!(parse(&["--unknown"]).unwrap_err().is_usage());
    }
}
