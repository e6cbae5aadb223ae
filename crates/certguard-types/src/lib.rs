//! Stable DTOs and IDs used across the certguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted decision report
//! - stable string IDs and codes for the access checks
//! - explain registry for reviewer guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    CertReport, Decision, DecisionRecord, Outcome, RulesSnapshot, SCHEMA_REPORT_V1,
    SCHEMA_RULES_V1, SourceField, SourceMeta, Summary, ToolMeta,
};
