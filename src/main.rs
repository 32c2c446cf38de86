mod adapter;
mod cli;
mod config;
mod errors;
mod google_client;
mod languages;
mod response;

use anyhow::Result;
use cli::Cli;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Load env variables from .env if present
    let _ = dotenvy::dotenv();
    // init logging; stdout is reserved for the result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let settings = config::load_settings()?;

    cli::handle_translate(cli, &settings).await
}
