use crate::model::EntitlementRecord;
use crate::policy::RuleSet;
use certguard_types::{Decision, Outcome, ids};
use std::collections::BTreeSet;

mod critical;
mod sod;
mod timebound;
mod unused;
mod user_status;


type Check = fn(&EntitlementRecord, &RuleSet, &BTreeSet<String>) -> Option<Decision>;

/// Evaluation order. The first check returning a decision wins.
const ORDERED: &[Check] = &[
    user_status::run,
    timebound::run,
    unused::run,
    sod::run,
    critical::run,
];

pub fn run_ordered(
    record: &EntitlementRecord,
    rules: &RuleSet,
    held: &BTreeSet<String>,
) -> Decision {
    ORDERED
        .iter()
        .find_map(|check| check(record, rules, held))
        .unwrap_or_else(approve)
}

fn approve() -> Decision {
    Decision::new(
        Outcome::Approve,
        ids::CHECK_ACCESS_DEFAULT,
        ids::CODE_NO_VIOLATION,
        "In use / no policy violation",
    )
}
