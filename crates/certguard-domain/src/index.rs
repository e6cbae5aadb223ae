//! Per-user entitlement sets for separation-of-duties checks.

use crate::model::EntitlementRecord;
use std::collections::{BTreeMap, BTreeSet};

static NO_ENTITLEMENTS: BTreeSet<String> = BTreeSet::new();

/// user -> every entitlement that user holds across the whole record set.
///
/// Must be built from the complete input before any decision is made: a row's SoD check sees
/// the entitlements of its sibling rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntitlementIndex {
    by_user: BTreeMap<String, BTreeSet<String>>,
}

impl EntitlementIndex {
    /// Single pass over `records`.
    pub fn build(records: &[EntitlementRecord]) -> Self {
        let mut by_user: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for r in records {
            by_user
                .entry(r.user.clone())
                .or_default()
                .insert(r.entitlement.clone());
        }
        Self { by_user }
    }

    /// Empty for users not present in the input.
    pub fn entitlements_for(&self, user: &str) -> &BTreeSet<String> {
        self.by_user.get(user).unwrap_or(&NO_ENTITLEMENTS)
    }

    pub fn user_count(&self) -> usize {
        self.by_user.len()
    }
}
