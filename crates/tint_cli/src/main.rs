//! CLI entry point for tintboard.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    config::load_dotenv();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
