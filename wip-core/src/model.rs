// wip_core/src/model.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Active,
    Completed,
    OnHold,
}

impl JobStatus {
    /// Server enum is `completed` / `inProgress` / anything else.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "completed" => JobStatus::Completed,
            "inProgress" => JobStatus::Active,
            _ => JobStatus::OnHold,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Completed => "completed",
            JobStatus::OnHold => "on-hold",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBalance {
    pub id: String,
    /// Signed; credits are negative.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipJob {
    pub id: String,
    pub name: String,
    #[serde(rename = "jobStatus")]
    pub status: JobStatus,
    pub hours_logged: f64,
    /// Raw WIP amount plus the job's open-balance total.
    pub wip_amount: f64,
    pub open_balance_total: f64,
    pub fee_target: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_balances: Option<Vec<OpenBalance>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipClient {
    pub id: String,
    pub name: String,
    pub code: String,
    pub address: String,
    pub open_balances: Vec<OpenBalance>,
    #[serde(rename = "clientWipOpenBalanceTotal")]
    pub open_balance_total: f64,
    pub imported_wip_balance: f64,
    pub jobs: Vec<WipJob>,
    #[serde(rename = "jobsTotalWIP")]
    pub jobs_total_wip: f64,
    #[serde(rename = "clientWipBalance")]
    pub wip_balance: f64,
}
