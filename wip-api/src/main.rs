mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wip_core::error::Result;
use wip_core::source_fs::FsWipSource;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let thresholds = config.thresholds()?;
    let source = FsWipSource::open(&config.data, thresholds)?;
    tracing::info!(
        data = %source.path().display(),
        clients = source.records().len(),
        auth = config.token.is_some(),
        "dataset loaded"
    );

    let state = AppState {
        source: Arc::new(source),
        thresholds,
        token: config.token.as_deref().map(Arc::from),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "WIP API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
