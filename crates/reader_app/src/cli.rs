use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "reader_app",
    version,
    about = "Summarize, read aloud and restyle page text from the terminal"
)]
pub struct Cli {
    /// RON configuration file (defaults to ./reader_assist.ron when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the most representative sentences of a page.
    Summarize {
        #[command(flatten)]
        page: PageArgs,
        /// Number of sentences to keep; values below one keep one.
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        sentences: Option<i64>,
    },
    /// Read the beginning of a page aloud.
    Read {
        #[command(flatten)]
        page: PageArgs,
        /// Speech rate, 1.0 is normal speed.
        #[arg(long)]
        rate: Option<f32>,
    },
    /// Treat each stdin line as a spoken command for the page.
    Voice {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Exchange JSON messages with a page, one per line on stdin and stdout.
    Session {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Print the effective configuration as RON.
    Config,
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Page file; `summarize` and `read` fall back to stdin.
    pub file: Option<PathBuf>,

    /// Extract visible text from HTML even without a doctype or <html> tag.
    #[arg(long)]
    pub html: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Command};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_sentence_counts_parse() {
        let cli = Cli::try_parse_from(["reader_app", "summarize", "page.txt", "-n", "-2"]).unwrap();
        match cli.command {
            Command::Summarize { page, sentences } => {
                assert_eq!(sentences, Some(-2));
                assert_eq!(page.file.as_deref(), Some(std::path::Path::new("page.txt")));
                assert!(!page.html);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["reader_app", "read", "--rate", "1.5", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Read { rate: Some(r), .. } if r == 1.5));
    }
}
