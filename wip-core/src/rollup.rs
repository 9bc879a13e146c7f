//! WIP aggregation: raw server records to the normalized client/job view.
//!
//! A job's WIP total is its own `wipAmount` plus its `wipTotalOpenBalance`.
//! A client's WIP balance is its own open-balance total, plus the imported
//! legacy balance, plus every job's WIP total. Order is kept as received.

use serde_json::Value;

use crate::model::{JobStatus, OpenBalance, WipClient, WipJob};
use crate::raw;

const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn normalize_clients(records: &[Value]) -> Vec<WipClient> {
    let clients: Vec<WipClient> = records.iter().map(normalize_client).collect();
    tracing::debug!(
        clients = clients.len(),
        jobs = clients.iter().map(|c| c.jobs.len()).sum::<usize>(),
        "normalized WIP page"
    );
    clients
}

pub fn normalize_client(record: &Value) -> WipClient {
    let open_balance_total = raw::num(record, "clientWipTotalOpenBalance");
    let imported_wip_balance = raw::num(record, "importedWipBalance");

    let mut jobs_total_wip = 0.0;
    let jobs: Vec<WipJob> = raw::list(record, "jobs")
        .iter()
        .map(|j| {
            let job = normalize_job(j);
            jobs_total_wip += job.wip_amount;
            job
        })
        .collect();

    WipClient {
        id: raw::id(record),
        name: raw::text_any(record, &["clientName", "name"]),
        code: raw::text_any(record, &["clientCode", "code"]),
        address: raw::text(record, "address"),
        open_balances: normalize_balances(raw::list(record, "clientWipOpenBalance")),
        open_balance_total,
        imported_wip_balance,
        jobs,
        jobs_total_wip,
        wip_balance: open_balance_total + jobs_total_wip + imported_wip_balance,
    }
}

pub fn normalize_job(record: &Value) -> WipJob {
    let open_balance_total = raw::num(record, "wipTotalOpenBalance");
    WipJob {
        id: raw::id(record),
        name: raw::text_any(record, &["jobName", "name"]),
        status: JobStatus::from_raw(&raw::text(record, "status")),
        hours_logged: raw::num(record, "duration") / SECONDS_PER_HOUR,
        wip_amount: raw::num(record, "wipAmount") + open_balance_total,
        open_balance_total,
        fee_target: raw::num(record, "jobFee"),
        open_balances: raw::opt_list(record, "wipOpenBalance").map(normalize_balances),
    }
}

pub fn normalize_balances(records: &[Value]) -> Vec<OpenBalance> {
    records
        .iter()
        .map(|b| OpenBalance {
            id: raw::id(b),
            amount: raw::num(b, "amount"),
            kind: raw::text(b, "type"),
            status: raw::text(b, "status"),
            date: raw::opt_text(b, "date"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn worked_example_totals_385() {
        let c = normalize_client(&json!({
            "clientWipTotalOpenBalance": 100,
            "importedWipBalance": 50,
            "jobs": [
                { "wipAmount": 200, "wipTotalOpenBalance": 25 },
                { "wipAmount": 10 }
            ]
        }));
        assert_eq!(c.jobs[0].wip_amount, 225.0);
        assert_eq!(c.jobs[1].wip_amount, 10.0);
        assert_eq!(c.jobs_total_wip, 235.0);
        assert_eq!(c.wip_balance, 385.0);
    }

    #[test]
    fn status_mapping() {
        let status = |s: Value| normalize_job(&json!({ "status": s })).status;
        assert_eq!(status(json!("completed")), JobStatus::Completed);
        assert_eq!(status(json!("inProgress")), JobStatus::Active);
        assert_eq!(status(json!("paused")), JobStatus::OnHold);
        assert_eq!(status(json!(null)), JobStatus::OnHold);
        assert_eq!(status(json!("Completed")), JobStatus::OnHold);
    }

    #[test]
    fn missing_or_malformed_jobs_contribute_nothing() {
        for jobs in [json!(null), json!("x"), json!({}), json!([])] {
            let c = normalize_client(&json!({
                "clientWipTotalOpenBalance": 40,
                "importedWipBalance": 2.5,
                "jobs": jobs,
            }));
            assert!(c.jobs.is_empty());
            assert_eq!(c.jobs_total_wip, 0.0);
            assert_eq!(c.wip_balance, 42.5);
        }
    }

    #[test]
    fn garbage_amounts_become_zero_not_nan() {
        let c = normalize_client(&json!({
            "clientWipTotalOpenBalance": "n/a",
            "importedWipBalance": null,
            "jobs": [{ "wipAmount": "lots", "wipTotalOpenBalance": {}, "duration": "?" }]
        }));
        assert_eq!(c.open_balance_total, 0.0);
        assert_eq!(c.imported_wip_balance, 0.0);
        assert_eq!(c.jobs[0].wip_amount, 0.0);
        assert_eq!(c.jobs[0].hours_logged, 0.0);
        assert_eq!(c.wip_balance, 0.0);
    }

    #[test]
    fn hours_are_duration_over_3600() {
        let j = normalize_job(&json!({ "duration": 5400 }));
        assert_eq!(j.hours_logged, 1.5);
    }

    #[test]
    fn balances_get_string_ids() {
        let c = normalize_client(&json!({
            "clientWipOpenBalance": [
                { "_id": 17, "amount": -30, "type": "credit", "status": "open", "date": "2024-03-01" },
                { "id": "b2", "amount": "12.5" }
            ],
            "jobs": [{ "_id": 9, "wipOpenBalance": [{ "_id": 1, "amount": 5 }] }]
        }));
        assert_eq!(c.open_balances[0].id, "17");
        assert_eq!(c.open_balances[0].amount, -30.0);
        assert_eq!(c.open_balances[0].kind, "credit");
        assert_eq!(c.open_balances[0].date.as_deref(), Some("2024-03-01"));
        assert_eq!(c.open_balances[1].id, "b2");
        assert_eq!(c.open_balances[1].amount, 12.5);
        assert_eq!(c.open_balances[1].date, None);
        assert_eq!(c.jobs[0].id, "9");
        let job_balances = c.jobs[0].open_balances.as_ref().unwrap();
        assert_eq!(job_balances[0].id, "1");
    }

    #[test]
    fn job_balances_absent_stay_none() {
        assert!(normalize_job(&json!({})).open_balances.is_none());
    }

    #[test]
    fn order_is_preserved() {
        let out = normalize_clients(&[
            json!({ "_id": "b", "jobs": [{ "_id": "2" }, { "_id": "1" }] }),
            json!({ "_id": "a" }),
        ]);
        let ids: Vec<_> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        let job_ids: Vec<_> = out[0].jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(job_ids, ["2", "1"]);
    }

    #[test]
    fn non_object_client_is_empty_zero_record() {
        let c = normalize_client(&json!("oops"));
        assert_eq!(c.id, "");
        assert_eq!(c.wip_balance, 0.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![json!({ "jobs": [{ "wipAmount": 1 }] })];
        let before = input.clone();
        let _ = normalize_clients(&input);
        assert_eq!(input, before);
    }
}
