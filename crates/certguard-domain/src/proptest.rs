//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - check ordering (inactive users always revoked)
//! - strict grace and unused-threshold boundaries
//! - user-level SoD flagging
//! - determinism and `auto_decided` consistency

use crate::engine::{decide, evaluate};
use crate::model::{EntitlementRecord, UserStatus};
use crate::policy::RuleSet;
use certguard_types::{Outcome, ids};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

fn arb_status() -> impl Strategy<Value = UserStatus> {
    prop_oneof![
        Just(UserStatus::Active),
        Just(UserStatus::Terminated),
        Just(UserStatus::Orphaned),
        "[A-Za-z]{0,10}".prop_map(|s| UserStatus::parse(&s)),
    ]
}

fn arb_criticality() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("LOW".to_string()),
        Just("medium".to_string()),
        Just("High".to_string()),
        Just("CRITICAL".to_string()),
        Just("critical".to_string()),
        Just(String::new()),
    ]
}

fn arb_entitlement() -> impl Strategy<Value = String> {
    (0u8..6).prop_map(|i| format!("E{i}"))
}

fn arb_record() -> impl Strategy<Value = EntitlementRecord> {
    (
        (0u8..4).prop_map(|i| format!("u{i}")),
        arb_entitlement(),
        arb_status(),
        arb_criticality(),
        prop::option::of(0u32..400),
        prop::option::of(-60i64..60),
    )
        .prop_map(|(user, ent, status, crit, last_used, tbd)| EntitlementRecord {
            user_status: status,
            criticality: crit,
            last_used_days: last_used,
            timebound_days_left: tbd,
            ..EntitlementRecord::new(&user, &ent)
        })
}

fn arb_rules() -> impl Strategy<Value = RuleSet> {
    (
        0u32..30,
        0u32..200,
        prop::collection::vec(arb_criticality(), 0..3),
        prop::collection::vec((arb_entitlement(), arb_entitlement()), 0..3),
    )
        .prop_map(|(grace, threshold, whitelist, conflicts)| {
            let mut rules = RuleSet {
                timebound_grace_days: grace,
                unused_days_threshold: threshold,
                ..RuleSet::default()
            }
            .with_whitelist(whitelist);
            for (a, b) in conflicts {
                rules = rules.with_conflict(&a, &b);
            }
            rules
        })
}

fn arb_held() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(arb_entitlement(), 0..6)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn inactive_users_are_always_revoked(
        mut record in arb_record(),
        rules in arb_rules(),
        held in arb_held(),
        orphaned in any::<bool>(),
    ) {
        record.user_status = if orphaned { UserStatus::Orphaned } else { UserStatus::Terminated };
        let d = decide(&record, &rules, &held);
        prop_assert_eq!(d.outcome, Outcome::Revoke);
        prop_assert_eq!(d.check_id, ids::CHECK_ACCESS_USER_STATUS);
    }

    #[test]
    fn auto_decided_matches_outcome(
        record in arb_record(),
        rules in arb_rules(),
        held in arb_held(),
    ) {
        let d = decide(&record, &rules, &held);
        prop_assert_eq!(d.auto_decided(), d.outcome != Outcome::Flag);
    }

    #[test]
    fn decide_is_deterministic(
        record in arb_record(),
        rules in arb_rules(),
        held in arb_held(),
    ) {
        let first = decide(&record, &rules, &held);
        let second = decide(&record, &rules, &held);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn grace_boundary_is_never_revoked_by_expiry(
        mut record in arb_record(),
        rules in arb_rules(),
        held in arb_held(),
    ) {
        record.user_status = UserStatus::Active;
        record.timebound_days_left = Some(-i64::from(rules.timebound_grace_days));
        let d = decide(&record, &rules, &held);
        prop_assert_ne!(d.check_id.as_str(), ids::CHECK_ACCESS_TIMEBOUND);

        record.timebound_days_left = Some(-i64::from(rules.timebound_grace_days) - 1);
        let d = decide(&record, &rules, &held);
        prop_assert_eq!(d.check_id.as_str(), ids::CHECK_ACCESS_TIMEBOUND);
        prop_assert_eq!(d.outcome, Outcome::Revoke);
    }

    #[test]
    fn unused_boundary_is_strict(
        mut record in arb_record(),
        rules in arb_rules(),
        held in arb_held(),
    ) {
        record.user_status = UserStatus::Active;
        record.timebound_days_left = None;
        record.last_used_days = Some(rules.unused_days_threshold);
        let d = decide(&record, &rules, &held);
        prop_assert_ne!(d.check_id.as_str(), ids::CHECK_ACCESS_UNUSED);

        record.last_used_days = Some(rules.unused_days_threshold + 1);
        let d = decide(&record, &rules, &held);
        prop_assert_eq!(d.check_id.as_str(), ids::CHECK_ACCESS_UNUSED);
        let expected = if rules.is_whitelisted(&record.criticality_key()) {
            Outcome::Flag
        } else {
            Outcome::Revoke
        };
        prop_assert_eq!(d.outcome, expected);
    }

    #[test]
    fn conflicting_users_are_flagged_on_every_row_reaching_sod(
        records in prop::collection::vec(arb_record(), 0..40),
        rules in arb_rules(),
    ) {
        let report = evaluate(&records, &rules);
        let index = crate::EntitlementIndex::build(&records);

        for (record, out) in records.iter().zip(&report.decisions) {
            let reaches_sod = !matches!(
                out.check_id.as_str(),
                ids::CHECK_ACCESS_USER_STATUS | ids::CHECK_ACCESS_TIMEBOUND | ids::CHECK_ACCESS_UNUSED
            );
            if reaches_sod && rules.first_conflict(index.entitlements_for(&record.user)).is_some() {
                prop_assert_eq!(out.decision, Outcome::Flag);
                prop_assert_eq!(out.check_id.as_str(), ids::CHECK_ACCESS_SOD);
            }
        }
    }

    #[test]
    fn evaluate_counts_add_up(
        records in prop::collection::vec(arb_record(), 0..40),
        rules in arb_rules(),
    ) {
        let report = evaluate(&records, &rules);
        prop_assert_eq!(report.decisions.len(), records.len());
        prop_assert_eq!(report.counts.total() as usize, records.len());
        let auto = report.decisions.iter().filter(|d| d.auto_decided).count();
        prop_assert_eq!(report.counts.auto_decided() as usize, auto);
    }
}
