//! Wire page of the "get WIP" endpoint and its normalized view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filter;
use crate::model::WipClient;
use crate::policy::Thresholds;
use crate::query::{Pagination, WipQuery};
use crate::rollup::{normalize_client, normalize_clients};
use crate::summary::{self, DashboardSummary};

/// `{data, pagination, summary}` as returned by the endpoint. `data` holds
/// raw client records; nothing about their shape is assumed here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WipPage {
    pub data: Vec<Value>,
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WipView {
    pub clients: Vec<WipClient>,
    pub pagination: Pagination,
    pub summary: DashboardSummary,
}

impl WipPage {
    pub fn into_view(self, thresholds: &Thresholds) -> WipView {
        let clients = normalize_clients(&self.data);
        let computed = summary::summarize(&clients, thresholds);
        WipView {
            summary: summary::resolve(self.summary.as_ref(), computed),
            clients,
            pagination: self.pagination,
        }
    }
}

/// Filter the full record set, slice out the requested page, and attach a
/// summary computed over every record that passed the filters.
pub fn build_page(records: &[Value], query: &WipQuery, thresholds: &Thresholds) -> WipPage {
    let mut kept: Vec<&Value> = Vec::new();
    let mut normalized: Vec<WipClient> = Vec::new();
    for r in records {
        let c = normalize_client(r);
        if filter::matches(&c, query, thresholds) {
            kept.push(r);
            normalized.push(c);
        }
    }

    let pagination = Pagination::new(query.page, query.limit, kept.len());
    let data = kept[pagination.range()].iter().map(|v| (*v).clone()).collect();
    let summary = summary::summarize(&normalized, thresholds);
    tracing::debug!(
        total = records.len(),
        matched = pagination.total,
        page = pagination.page,
        "built WIP page"
    );

    WipPage {
        data,
        pagination,
        summary: serde_json::to_value(summary).ok(),
    }
}
