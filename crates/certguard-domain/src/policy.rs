use certguard_types::RulesSnapshot;
use std::collections::BTreeSet;

pub const DEFAULT_TIMEBOUND_GRACE_DAYS: u32 = 7;
pub const DEFAULT_UNUSED_DAYS_THRESHOLD: u32 = 90;

/// Two entitlements that must never be held by the same user. Order is irrelevant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictPair {
    pub first: String,
    pub second: String,
}

impl ConflictPair {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn held_by(&self, entitlements: &BTreeSet<String>) -> bool {
        entitlements.contains(&self.first) && entitlements.contains(&self.second)
    }
}

/// The rule table, resolved once per run and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    /// Days past expiry tolerated before a time-bound grant is revoked.
    pub timebound_grace_days: u32,
    pub unused_days_threshold: u32,
    /// Criticalities flagged instead of revoked when unused, compared against the uppercased
    /// record criticality.
    pub criticality_whitelist: BTreeSet<String>,
    /// Checked in order; the first conflicting pair is reported.
    pub sod_conflicts: Vec<ConflictPair>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            timebound_grace_days: DEFAULT_TIMEBOUND_GRACE_DAYS,
            unused_days_threshold: DEFAULT_UNUSED_DAYS_THRESHOLD,
            criticality_whitelist: BTreeSet::new(),
            sod_conflicts: Vec::new(),
        }
    }
}

impl RuleSet {
    /// Add whitelist entries as written. Only uppercase entries can match a criticality.
    pub fn with_whitelist<I, S>(mut self, criticalities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.criticality_whitelist
            .extend(criticalities.into_iter().map(|c| c.as_ref().to_string()));
        self
    }

    pub fn with_conflict(mut self, first: &str, second: &str) -> Self {
        self.sod_conflicts.push(ConflictPair::new(first, second));
        self
    }

    /// `key` must already be uppercased (see `EntitlementRecord::criticality_key`).
    pub fn is_whitelisted(&self, key: &str) -> bool {
        self.criticality_whitelist.contains(key)
    }

    /// First configured pair fully held by the user, if any.
    pub fn first_conflict(&self, entitlements: &BTreeSet<String>) -> Option<&ConflictPair> {
        self.sod_conflicts.iter().find(|p| p.held_by(entitlements))
    }

    pub fn snapshot(&self) -> RulesSnapshot {
        RulesSnapshot {
            timebound_grace_days: self.timebound_grace_days,
            unused_days_threshold: self.unused_days_threshold,
            criticality_whitelist: self.criticality_whitelist.iter().cloned().collect(),
            sod_conflicts: self
                .sod_conflicts
                .iter()
                .map(|p| (p.first.clone(), p.second.clone()))
                .collect(),
        }
    }
}
