// wip_core/src/source.rs
use crate::error::Result;
use crate::page::WipPage;
use crate::query::WipQuery;

#[derive(Clone, Debug, Default)]
pub struct SourceParams {
    /// JSON dataset for the file backend.
    pub file: Option<std::path::PathBuf>,
    /// Base URL of the WIP API for the HTTP backend, e.g. `http://localhost:8080`.
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub warning_ratio: Option<f64>,
}

pub trait WipSource: Send + Sync {
    fn fetch_page(&self, query: &WipQuery) -> Result<WipPage>;
}
