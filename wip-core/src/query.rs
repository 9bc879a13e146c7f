// wip_core/src/query.rs
use serde::{Deserialize, Serialize};

use crate::error::{Result, WipError};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetMetCondition {
    #[default]
    All,
    Met,
    NotMet,
}

impl TargetMetCondition {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetMetCondition::All => "all",
            TargetMetCondition::Met => "met",
            TargetMetCondition::NotMet => "notMet",
        }
    }
}

impl std::str::FromStr for TargetMetCondition {
    type Err = WipError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "all" => Ok(TargetMetCondition::All),
            "met" => Ok(TargetMetCondition::Met),
            "notMet" | "not-met" => Ok(TargetMetCondition::NotMet),
            other => Err(WipError::InvalidQuery(format!(
                "unknown targetMetCondition '{other}' (expected all|met|notMet)"
            ))),
        }
    }
}

/// Parameters of the paginated "get WIP" query, with the wire names the
/// endpoint expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WipQuery {
    pub page: usize,
    pub limit: usize,
    pub search: String,
    pub target_met_condition: TargetMetCondition,
    #[serde(rename = "WIPWarningJobs")]
    pub wip_warning_jobs: bool,
}

impl Default for WipQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            target_met_condition: TargetMetCondition::All,
            wip_warning_jobs: false,
        }
    }
}

impl WipQuery {
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(WipError::InvalidQuery("page is 1-based".into()));
        }
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(WipError::InvalidQuery(format!(
                "limit must be within 1..={MAX_LIMIT}, got {}",
                self.limit
            )));
        }
        Ok(())
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs.push((
            "targetMetCondition",
            self.target_met_condition.as_str().to_string(),
        ));
        pairs.push(("WIPWarningJobs", self.wip_warning_jobs.to_string()));
        pairs
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// Index range of `page` within the full result set, clamped to `total`.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.page.saturating_sub(1).saturating_mul(self.limit);
        let start = start.min(self.total);
        let end = start.saturating_add(self.limit).min(self.total);
        start..end
    }
}
