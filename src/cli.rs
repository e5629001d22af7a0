// Command line interface module
// Handles parsing of command line arguments and mode resolution

use anyhow::{bail, Result};
use clap::Parser;

/// artspace - A terminal art gallery viewer
#[derive(Parser, Debug)]
#[command(name = "artspace")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print the collection and exit
    #[arg(short, long, default_value = "false")]
    pub list: bool,

    /// Print artwork metadata only, without the framed card
    #[arg(long, default_value = "false")]
    pub plain: bool,

    /// Apply navigation steps non-interactively and exit
    /// (a string of 'n' = next, 'p' = previous, 'f' = first)
    #[arg(short, long, value_name = "STEPS")]
    pub script: Option<String>,
}

/// How the viewer should run after argument resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the collection listing and exit
    List,
    /// Apply the given navigation steps and exit
    Script(String),
    /// Read navigation commands from stdin
    Interactive,
}

/// Parsed arguments with the run mode resolved
#[derive(Debug)]
pub struct ParsedArgs {
    pub mode: Mode,
    pub plain: bool,
}

/// Parse command line arguments and resolve the run mode
pub fn parse_args() -> Result<ParsedArgs> {
    let args = Args::parse();
    resolve(args)
}

fn resolve(args: Args) -> Result<ParsedArgs> {
    let mode = match (args.list, args.script) {
        (true, Some(_)) => {
            bail!("--list and --script are mutually exclusive");
        }
        (true, None) => Mode::List,
        (false, Some(steps)) => {
            if steps.trim().is_empty() {
                bail!("--script requires at least one step ('n', 'p' or 'f')");
            }
            Mode::Script(steps)
        }
        (false, None) => Mode::Interactive,
    };

    Ok(ParsedArgs {
        mode,
        plain: args.plain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: bool, plain: bool, script: Option<&str>) -> Args {
        Args {
            list,
            plain,
            script: script.map(str::to_owned),
        }
    }

    #[test]
    fn defaults_to_interactive_mode() {
        let parsed = resolve(args(false, false, None)).unwrap();
        assert_eq!(parsed.mode, Mode::Interactive);
        assert!(!parsed.plain);
    }

    #[test]
    fn script_steps_are_carried_through() {
        let parsed = resolve(args(false, true, Some("nnp"))).unwrap();
        assert_eq!(parsed.mode, Mode::Script("nnp".to_owned()));
        assert!(parsed.plain);
    }

    #[test]
    fn list_and_script_together_are_rejected() {
        assert!(resolve(args(true, false, Some("n"))).is_err());
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(resolve(args(false, false, Some("  "))).is_err());
    }
}
