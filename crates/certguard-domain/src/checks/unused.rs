use crate::model::EntitlementRecord;
use crate::policy::RuleSet;
use certguard_types::{Decision, Outcome, ids};
use std::collections::BTreeSet;

pub fn run(record: &EntitlementRecord, rules: &RuleSet, _: &BTreeSet<String>) -> Option<Decision> {
    let last_used = record.last_used();
    if last_used <= rules.unused_days_threshold {
        return None;
    }

    let crit = record.criticality_key();
    if rules.is_whitelisted(&crit) {
        return Some(Decision::new(
            Outcome::Flag,
            ids::CHECK_ACCESS_UNUSED,
            ids::CODE_UNUSED_CRITICAL,
            format!("Unused {last_used}d but critical ({crit})"),
        ));
    }

    Some(Decision::new(
        Outcome::Revoke,
        ids::CHECK_ACCESS_UNUSED,
        ids::CODE_UNUSED_REVOKED,
        format!("Unused {last_used}d"),
    ))
}
