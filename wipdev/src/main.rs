mod application;
mod presentation;

use tracing_subscriber::EnvFilter;
use wip_core::error::Result;

fn main() -> Result<()> {
    // stdout carries tables and JSON; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    application::run()
}
