use std::sync::Arc;

use wip_core::Thresholds;
use wip_core::source::WipSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn WipSource>,
    pub thresholds: Thresholds,
    pub token: Option<Arc<str>>,
}
