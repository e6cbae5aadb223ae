//! Rendering utilities for certification artifacts (Markdown report, decisions CSV).

#![forbid(unsafe_code)]

mod csv_out;
mod markdown;
mod model;

pub use csv_out::{decision_columns, render_decisions_csv};
pub use markdown::render_markdown;
pub use model::{RenderableItem, RenderableOutcome, RenderableReport, RenderableSummary};
