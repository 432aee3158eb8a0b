use clap::{Parser, Subcommand};
use secret_fetch::{configs::InvocationMode, server};

#[derive(Parser)]
#[command(version, about = "Fetches the API key from Vault and reports its length")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run as an AWS Lambda custom runtime
    Lambda,
    /// Serve /invoke and /health over HTTP
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mode = cli.command.map(|command| match command {
        Command::Lambda => InvocationMode::Lambda,
        Command::Serve => InvocationMode::Serve,
    });

    server::start(mode).await;
}
