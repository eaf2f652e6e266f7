//! Food Park site server
//!
//! Serves the restaurant website, keeping the Google Places details for the
//! configured place in a TTL cache.

use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use foodpark::cli::Cli;
use foodpark::config::Config;
use foodpark::server::{self, AppState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    cli.apply(&mut config);

    info!(
        place_id = %config.place_id,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "Starting food park site"
    );

    if let Err(e) = server::serve(AppState::new(config)).await {
        error!("Server error: {e}");
        process::exit(1);
    }
}
