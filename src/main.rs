use clap::Parser;
use tracing_subscriber::EnvFilter;

use humancron::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { expression } => {
            let cron = humancron::convert(&expression)?;
            tracing::debug!("converted {expression:?} to {cron:?}");
            println!("{cron}");
        }
        Commands::Validate { expression } => {
            if humancron::is_valid(&expression) {
                println!("The expression '{expression}' is valid.");
            } else {
                println!("The expression '{expression}' is invalid.");
            }
        }
    }

    Ok(())
}
