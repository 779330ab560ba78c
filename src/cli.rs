//! Command-line flags for the shell.

use std::time::Duration;

use clap::Parser;

use crate::api::pokeapi::DEFAULT_BASE_URL;

/// Interactive Pokedex backed by PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Explore location areas and catch Pokemon from the terminal")]
#[command(version)]
pub struct Cli {
    /// Seconds a fetched response stays cached
    #[arg(long, value_name = "SECS", default_value_t = 300)]
    pub cache_interval: u64,

    /// Base URL of the PokeAPI v2 endpoints
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "pokedex=trace")
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}
