mod model;
mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::server::{config::Config, error::AppError, startup};

/// Document CRUD API with a JSON fixture seeder.
#[derive(Parser)]
#[command(name = "docseed", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Load every fixture in the seeds directory into the database and exit
    Seed {
        /// Directory containing `.json` fixture files, overrides SEEDS_DIR
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => startup::serve(config).await,
        Command::Seed { dir } => startup::seed_once(&config, dir).await,
    }
}
