use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `rules.toml` schema v1.
///
/// Every field is optional; missing fields take the built-in defaults. Unknown keys are rejected
/// so that a typo cannot silently fall back to a default threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RulesConfigV1 {
    /// Optional schema string for tooling (`certguard.rules.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Days past a time-bound grant's end tolerated before revocation (default 7).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timebound_grace_days: Option<u32>,

    /// Days without use after which access is revoked or flagged (default 90).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unused_days_threshold: Option<u32>,

    /// Criticalities flagged instead of revoked when unused. Matched against the uppercased
    /// record criticality, so entries are written in uppercase.
    #[serde(default)]
    pub criticality_whitelist: Vec<String>,

    /// Pairs of entitlements one user must not hold together. Each entry has exactly two items.
    #[serde(default)]
    pub sod_conflicts: Vec<Vec<String>>,
}
