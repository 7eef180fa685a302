//! Policy Cache - A bounded in-memory cache with pluggable eviction
//!
//! Reads commands from stdin, one per line, and writes one JSON response per
//! line to stdout. Discard notifications and diagnostics go to stderr.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::{Config, Session};

/// Main entry point for the cache driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache with the configured capacity and policy
/// 4. Execute stdin commands until EOF
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().context("invalid cache configuration")?;
    info!(
        "Configuration loaded: max_items={}, policy={}",
        config.max_items, config.policy
    );

    let mut session = Session::from_config(&config).context("failed to build cache")?;

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if let Some(response) = session.handle_line(&line) {
            serde_json::to_writer(&mut out, &response).context("failed to encode response")?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
    }

    info!("Input closed, {} entries resident", session.cache().count());
    Ok(())
}
