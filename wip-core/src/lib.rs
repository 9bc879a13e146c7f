#![forbid(unsafe_code)]

pub mod error;
pub mod expense;
pub mod filter;
pub mod format;
pub mod model;
pub mod page;
pub mod policy;
pub mod query;
pub mod raw;
pub mod rollup;
pub mod summary;

pub mod source;
pub mod source_factory;
pub mod source_fs;
#[cfg(feature = "http")]
pub mod source_http;

// Re-exports: stable API surface
pub use model::{JobStatus, OpenBalance, WipClient, WipJob};
pub use page::{WipPage, WipView, build_page};
pub use policy::Thresholds;
pub use query::{Pagination, TargetMetCondition, WipQuery};
pub use rollup::{normalize_client, normalize_clients, normalize_job};
pub use summary::{DashboardSummary, resolve, summarize};
