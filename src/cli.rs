//! Command-line interface definitions

use clap::{Parser, Subcommand};

/// Convert human-readable schedule descriptions to standard cron format
#[derive(Debug, Parser)]
#[command(name = "humancron", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a schedule description to a cron expression
    Convert {
        /// The schedule description, e.g. "every Monday at 10 AM"
        expression: String,
    },

    /// Check whether a schedule description is recognized
    Validate {
        /// The schedule description to check
        expression: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from(["humancron", "convert", "every 5 minutes"]);
        match cli.command {
            Commands::Convert { expression } => assert_eq!(expression, "every 5 minutes"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::parse_from(["humancron", "validate", "every Monday at 10 AM"]);
        match cli.command {
            Commands::Validate { expression } => assert_eq!(expression, "every Monday at 10 AM"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
