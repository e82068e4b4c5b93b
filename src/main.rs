//! Pokedex - browse Pokemon world location areas from the terminal

use std::io;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::api::PokeApiClient;
use pokedex::cli::Cli;
use pokedex::{Cache, Config, Pager, Repl};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber for logging (stderr)
/// 3. Load configuration from environment variables, apply flag overrides
/// 4. Create the page and area caches, starting their reapers
/// 5. Run the REPL on stdin/stdout until `exit`, end of input or Ctrl+C
/// 6. Stop the reapers
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to "warn" so logs stay out of the way of the prompt; override
    // with RUST_LOG. Logs go to stderr, REPL output to stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().with_overrides(&cli);
    info!(
        "Configuration loaded: cache_ttl={}s, base_url={}, page_size={}, timeout={}s",
        config.cache_ttl_secs, config.base_url, config.page_size, config.http_timeout_secs
    );

    let client = PokeApiClient::from_config(&config).context("failed to build HTTP client")?;
    let (pages, pages_reaper) = Cache::new(config.cache_ttl());
    let (areas, areas_reaper) = Cache::new(config.cache_ttl());

    let pager = Pager::new(client, pages, areas, config.page_size);
    let mut repl = Repl::new(pager, io::stdout());
    let stdin = BufReader::new(tokio::io::stdin());

    let interrupted = tokio::select! {
        result = repl.run(stdin) => {
            result.context("REPL failed")?;
            false
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            info!("Received Ctrl+C, shutting down");
            true
        }
    };

    let pages_exit = pages_reaper.stop().await;
    let areas_exit = areas_reaper.stop().await;
    debug!(?pages_exit, ?areas_exit, "Cache reapers stopped");

    // A stdin read may still be parked on the blocking pool, which would hold
    // up runtime shutdown until the next newline.
    if interrupted {
        std::process::exit(130);
    }

    Ok(())
}
