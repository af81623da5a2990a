use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use credit_risk::error::AppError;

use crate::score::{run_batch, run_score, BatchArgs, ScoreArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Risk Service",
    about = "Serve and exercise the credit-default risk evaluation pipeline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single application from a JSON file
    Score(ScoreArgs),
    /// Evaluate a CSV export of applications as one batch
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured scorer artifact path
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Batch(args) => run_batch(args),
    }
}
