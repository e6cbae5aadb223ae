use crate::model::EntitlementRecord;
use crate::policy::RuleSet;
use certguard_types::{Decision, Outcome, ids};
use std::collections::BTreeSet;

/// User-level: `held` is every entitlement of the record's user, not just this row's.
pub fn run(_: &EntitlementRecord, rules: &RuleSet, held: &BTreeSet<String>) -> Option<Decision> {
    let pair = rules.first_conflict(held)?;

    Some(Decision::new(
        Outcome::Flag,
        ids::CHECK_ACCESS_SOD,
        ids::CODE_SOD_CONFLICT,
        format!("SoD conflict: {} & {}", pair.first, pair.second),
    ))
}
