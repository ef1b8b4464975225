//! Pure policy evaluation (no IO).
//!
//! Input: per-project dependency records materialized elsewhere, plus a
//! caller-supplied current date and an injected LTS schedule.
//! Output: per-dependency verdicts aggregated into project and
//! multi-project reports.

#![forbid(unsafe_code)]

pub mod error;
pub mod expiry;
pub mod policy;
pub mod semver;

mod engine;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate_project, evaluate_projects};
pub use error::EngineError;
