use std::env;
use std::io::{stdout, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Human-readable output on a terminal, JSON lines for log collectors.
pub fn setup_logging() {
    let default_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    if stdout().is_terminal() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_current_span(false)
            .init();
    }

    tracing::info!(level = %default_level, "Logging initialized");
}
