use crate::checks;
use crate::index::EntitlementIndex;
use crate::model::EntitlementRecord;
use crate::policy::RuleSet;
use crate::report::{DomainReport, OutcomeCounts, decision_record};
use certguard_types::{Decision, DecisionRecord};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Decide a single record. `user_entitlements` must be the full set for `record.user`.
///
/// Pure: same inputs, same decision.
pub fn decide(
    record: &EntitlementRecord,
    rules: &RuleSet,
    user_entitlements: &BTreeSet<String>,
) -> Decision {
    checks::run_ordered(record, rules, user_entitlements)
}

/// Index the whole record set, then decide every record.
///
/// Records are independent once the index exists, so they are decided in parallel. Output order
/// matches input order.
pub fn evaluate(records: &[EntitlementRecord], rules: &RuleSet) -> DomainReport {
    let index = EntitlementIndex::build(records);

    let decisions: Vec<DecisionRecord> = records
        .par_iter()
        .map(|r| decision_record(r, decide(r, rules, index.entitlements_for(&r.user))))
        .collect();

    let counts = OutcomeCounts::from_outcomes(decisions.iter().map(|d| d.decision));

    DomainReport {
        decisions,
        counts,
        users: index.user_count() as u32,
    }
}
