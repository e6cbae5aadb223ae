use crate::model::EntitlementRecord;
use crate::policy::RuleSet;
use certguard_types::{Decision, Outcome, ids};
use std::collections::BTreeSet;

pub fn run(record: &EntitlementRecord, _: &RuleSet, _: &BTreeSet<String>) -> Option<Decision> {
    if !record.user_status.is_inactive() {
        return None;
    }

    Some(Decision::new(
        Outcome::Revoke,
        ids::CHECK_ACCESS_USER_STATUS,
        ids::CODE_INACTIVE_USER,
        format!("User status {}", record.user_status.as_str()),
    ))
}
