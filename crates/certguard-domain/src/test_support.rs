use crate::model::{EntitlementRecord, UserStatus};
use crate::policy::RuleSet;
use std::collections::BTreeSet;

pub fn record(
    user: &str,
    entitlement: &str,
    status: &str,
    criticality: &str,
    last_used_days: Option<u32>,
    timebound_days_left: Option<i64>,
) -> EntitlementRecord {
    EntitlementRecord {
        user_status: UserStatus::parse(status),
        criticality: criticality.to_string(),
        last_used_days,
        timebound_days_left,
        ..EntitlementRecord::new(user, entitlement)
    }
}

/// A plain active, recently used, low-criticality row.
pub fn active(user: &str, entitlement: &str) -> EntitlementRecord {
    record(user, entitlement, "ACTIVE", "LOW", Some(10), None)
}

pub fn held(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn rules_with_conflict(first: &str, second: &str) -> RuleSet {
    RuleSet::default().with_conflict(first, second)
}
