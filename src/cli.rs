//! Command-line interface parsing
//!
//! Flags override the matching `POKEDEX_*` environment variables.

use clap::Parser;

/// Pokedex - browse Pokemon world location areas from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Browse PokeAPI location areas with a cached REPL")]
#[command(version)]
pub struct Cli {
    /// Seconds a fetched page stays cached
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// PokeAPI root URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Location areas listed per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
