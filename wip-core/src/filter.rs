use crate::model::WipClient;
use crate::policy::Thresholds;
use crate::query::{TargetMetCondition, WipQuery};

/// Whether a normalized client survives the query's search and condition
/// filters. Pagination is applied separately.
pub fn matches(client: &WipClient, query: &WipQuery, thresholds: &Thresholds) -> bool {
    matches_search(client, &query.search)
        && matches_target(client, query.target_met_condition, thresholds)
        && (!query.wip_warning_jobs || client.jobs.iter().any(|j| thresholds.is_warning(j)))
}

fn matches_search(client: &WipClient, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |s: &str| s.to_lowercase().contains(&needle);
    hit(&client.name) || hit(&client.code) || client.jobs.iter().any(|j| hit(&j.name))
}

fn matches_target(client: &WipClient, cond: TargetMetCondition, thresholds: &Thresholds) -> bool {
    let any_met = || client.jobs.iter().any(|j| thresholds.target_met(j));
    match cond {
        TargetMetCondition::All => true,
        TargetMetCondition::Met => any_met(),
        TargetMetCondition::NotMet => !any_met(),
    }
}
