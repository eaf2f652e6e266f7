//! Command-line interface parsing for the food park server
//!
//! Flags override the matching environment settings. Credentials are only
//! read from the environment.

use std::time::Duration;

use clap::Parser;

use crate::config::Config;

/// Food park site server - serves the restaurant page backed by Google Places
#[derive(Parser, Debug)]
#[command(name = "foodpark")]
#[command(about = "Restaurant website server backed by Google Places details")]
#[command(version)]
pub struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long, short, value_name = "PORT")]
    pub port: Option<u16>,

    /// Address to bind (overrides BIND_ADDR)
    ///
    /// Examples:
    ///   foodpark --bind 127.0.0.1
    ///   foodpark --bind 0.0.0.0 --port 8080
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Seconds a fetched place record stays fresh (overrides CACHE_TTL_SECS)
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,
}

impl Cli {
    /// Applies any flags given on the command line to `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(bind) = &self.bind {
            config.bind_addr = bind.clone();
        }
        if let Some(secs) = self.cache_ttl {
            config.cache_ttl = Duration::from_secs(secs);
        }
    }
}
