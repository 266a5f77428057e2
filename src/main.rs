mod auth;
mod cli;
mod error;
mod github;
mod output;

use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting cifail");

    if let Err(e) = cli.execute().await {
        output::print_error(&e);
        std::process::exit(1);
    }
}
