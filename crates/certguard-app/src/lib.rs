//! Use case orchestration for certguard.
//!
//! This crate provides the application layer: use cases that coordinate the source, settings,
//! domain, and render layers. It is thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging setup, and exit
//! codes.

#![forbid(unsafe_code)]

mod artifacts;
mod certify;
mod explain;
mod report;

pub use artifacts::{Artifacts, write_artifacts, write_text};
pub use certify::{CertifyInput, CertifyOutput, flag_exit_code, run_certify};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use report::{parse_report_json, render_markdown, serialize_report, to_renderable};
