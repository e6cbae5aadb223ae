use crate::model::EntitlementRecord;
use crate::policy::RuleSet;
use certguard_types::{Decision, Outcome, ids};
use std::collections::BTreeSet;

pub fn run(record: &EntitlementRecord, rules: &RuleSet, _: &BTreeSet<String>) -> Option<Decision> {
    let days_left = record.timebound_days_left?;

    // Strict: exactly `-grace` is still inside the window.
    if days_left >= -i64::from(rules.timebound_grace_days) {
        return None;
    }

    Some(Decision::new(
        Outcome::Revoke,
        ids::CHECK_ACCESS_TIMEBOUND,
        ids::CODE_TIMEBOUND_EXPIRED,
        format!("Time-bound access expired {} days ago", days_left.unsigned_abs()),
    ))
}
