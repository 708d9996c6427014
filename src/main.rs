//! Mini LRU - command replay driver
//!
//! Reads cache commands from stdin and prints one result per line.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_lru::{replay, Config, LruCache};

/// Main entry point for the replay driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (to stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache with the configured capacity
/// 4. Replay stdin against the cache until EOF
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: capacity={}", config.capacity);

    let mut cache = LruCache::new(config.capacity)
        .with_context(|| format!("cannot create cache with capacity {}", config.capacity))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    replay::run(&mut cache, stdin.lock(), stdout.lock()).context("replay failed")?;

    info!("Replay complete: {}", cache.stats());
    Ok(())
}
