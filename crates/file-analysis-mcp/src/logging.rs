// Rust guideline compliant 2026-10-19

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` is used. Logs go
/// to stderr because stdout carries the MCP transport.
pub fn init_tracing(default_directives: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .with_context(|| format!("invalid log directives '{default_directives}'"))?;

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}
