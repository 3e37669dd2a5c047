mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seasondb")]
#[command(about = "Season-record ETL pipeline: collect, structure, load")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the source page and write the raw text blob
    Collect,
    /// Turn the raw blob into normalized season records via the model
    Structure,
    /// Upsert the structured records into the hosted table
    Load,
    /// Collect, structure, and load in sequence
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = seasondb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect => commands::collect(&config).await,
        Commands::Structure => commands::structure(&config).await,
        Commands::Load => commands::load(&config).await,
        Commands::Run => commands::run(&config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
