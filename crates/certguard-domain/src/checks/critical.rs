use crate::model::EntitlementRecord;
use crate::policy::RuleSet;
use certguard_types::{Decision, Outcome, ids};
use std::collections::BTreeSet;

pub fn run(record: &EntitlementRecord, _: &RuleSet, _: &BTreeSet<String>) -> Option<Decision> {
    if record.criticality_key() != "CRITICAL" {
        return None;
    }

    Some(Decision::new(
        Outcome::Flag,
        ids::CHECK_ACCESS_CRITICAL,
        ids::CODE_CRITICAL_REVIEW,
        "Critical entitlement requires owner/manager review",
    ))
}
