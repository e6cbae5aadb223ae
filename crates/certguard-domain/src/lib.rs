//! Pure certification evaluation (no IO).
//!
//! Input: entitlement records read elsewhere, plus an immutable rule set.
//! Output: one decision per record + summary counts.

#![forbid(unsafe_code)]

pub mod index;
pub mod model;
pub mod policy;
pub mod report;

mod checks;
mod engine;
mod fingerprint;

pub use engine::{decide, evaluate};
pub use fingerprint::fingerprint_for_decision;
pub use index::EntitlementIndex;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod proptest;
