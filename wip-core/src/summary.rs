use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::WipClient;
use crate::policy::Thresholds;

/// Figures shown on the WIP dashboard cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: u64,
    pub total_jobs: u64,
    #[serde(rename = "totalWIP")]
    pub total_wip: f64,
    pub ready_to_invoice_count: u64,
    pub ready_to_invoice_amount: f64,
}

pub fn summarize(clients: &[WipClient], thresholds: &Thresholds) -> DashboardSummary {
    let mut s = DashboardSummary {
        total_clients: clients.len() as u64,
        ..Default::default()
    };
    for c in clients {
        s.total_jobs += c.jobs.len() as u64;
        s.total_wip += c.wip_balance;
        for j in c.jobs.iter().filter(|j| thresholds.target_met(j)) {
            s.ready_to_invoice_count += 1;
            s.ready_to_invoice_amount += j.wip_amount;
        }
    }
    s
}

/// Merge a server-computed summary block over locally computed figures.
/// Each field is taken from the server when it is present and numeric;
/// counts must also be non-negative integers.
pub fn resolve(server: Option<&Value>, computed: DashboardSummary) -> DashboardSummary {
    let Some(block) = server.filter(|v| v.is_object()) else {
        return computed;
    };
    let count = |key: &str, fallback: u64| {
        // non-integer, negative or out-of-range counts fall back
        block.get(key).and_then(Value::as_u64).unwrap_or(fallback)
    };
    let amount = |key: &str, fallback: f64| {
        block
            .get(key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
            .unwrap_or(fallback)
    };
    DashboardSummary {
        total_clients: count("totalClients", computed.total_clients),
        total_jobs: count("totalJobs", computed.total_jobs),
        total_wip: amount("totalWIP", computed.total_wip),
        ready_to_invoice_count: count("readyToInvoiceCount", computed.ready_to_invoice_count),
        ready_to_invoice_amount: amount("readyToInvoiceAmount", computed.ready_to_invoice_amount),
    }
}
