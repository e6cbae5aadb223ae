use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers for certguard artifacts.
pub const SCHEMA_REPORT_V1: &str = "certguard.report.v1";
pub const SCHEMA_RULES_V1: &str = "certguard.rules.v1";

/// Outcome of a single certification decision.
///
/// Kept deliberately small: a reviewer only ever sees one of these three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Approve,
    Revoke,
    Flag,
}

impl Outcome {
    /// Approvals and revocations need no human; flags do.
    pub fn is_auto(self) -> bool {
        matches!(self, Outcome::Approve | Outcome::Revoke)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Approve => "APPROVE",
            Outcome::Revoke => "REVOKE",
            Outcome::Flag => "FLAG",
        }
    }
}

/// Result of evaluating one record: outcome plus the check that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub outcome: Outcome,
    pub reason: String,
    pub check_id: String,
    pub code: String,
}

impl Decision {
    pub fn new(outcome: Outcome, check_id: &str, code: &str, reason: impl Into<String>) -> Self {
        Self {
            outcome,
            reason: reason.into(),
            check_id: check_id.to_string(),
            code: code.to_string(),
        }
    }

    pub fn auto_decided(&self) -> bool {
        self.outcome.is_auto()
    }
}

/// One source cell, exactly as read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceField {
    pub name: String,
    pub value: String,
}

impl SourceField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One output row: the original record fields followed by the decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionRecord {
    /// 1-based data row in the source file (header excluded).
    pub row: u64,
    pub user: String,
    pub entitlement: String,
    pub user_status: String,
    pub criticality: String,
    pub last_used_days: Option<u32>,
    pub timebound_days_left: Option<i64>,

    /// Every source cell in header order, raw text included (`None` stays `None`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_fields: Vec<SourceField>,

    pub decision: Outcome,
    pub reason: String,
    pub auto_decided: bool,

    pub check_id: String,
    pub code: String,

    /// SHA-256 over `check_id|code|user|entitlement`; stable across runs.
    pub fingerprint: String,
}

/// Snapshot of the effective rule table, embedded in the report for auditability.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RulesSnapshot {
    pub timebound_grace_days: u32,
    pub unused_days_threshold: u32,
    pub criticality_whitelist: Vec<String>,
    pub sod_conflicts: Vec<(String, String)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceMeta {
    /// File name of the entitlement source (no directories).
    pub name: String,
    pub rows: u32,
    /// Header row of the source, in file order.
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Aggregate counts. Rates are percentages rounded to one decimal; `0.0` when `total == 0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub total: u32,
    pub approved: u32,
    pub revoked: u32,
    pub flagged: u32,
    pub auto_decided: u32,
    pub auto_rate_pct: f64,
    pub flag_rate_pct: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The `decisions.json` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CertReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub source: SourceMeta,
    pub rules: RulesSnapshot,
    pub summary: Summary,
    pub decisions: Vec<DecisionRecord>,
}
