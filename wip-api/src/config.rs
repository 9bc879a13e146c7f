use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use wip_core::Thresholds;
use wip_core::error::{Result, WipError};

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "WIP API reference service", long_about = None)]
pub struct Config {
    /// Listen address
    #[arg(long, env = "WIP_API_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// JSON dataset of raw client records served by /api/wip
    #[arg(long, env = "WIP_DATA")]
    pub data: PathBuf,

    /// Fraction of a job's fee target at which it counts as a warning job
    #[arg(long, env = "WIP_WARNING_RATIO", default_value_t = wip_core::policy::DEFAULT_WARNING_RATIO)]
    pub warning_ratio: f64,

    /// When set, /api routes require `Authorization: Bearer <token>`
    #[arg(long, env = "WIP_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl Config {
    pub fn thresholds(&self) -> Result<Thresholds> {
        Thresholds::new(self.warning_ratio)
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds()?;
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(WipError::Config("token must not be blank".into()));
        }
        Ok(())
    }
}
