//! Stable DTOs and IDs used across the supported workspace.
//!
//! This crate is intentionally boring:
//! - data types for the audit input (dependency records)
//! - data types for the emitted report (the JSON compatibility surface)
//! - stable policy names and fixed message strings
//! - wire date formatting helpers

#![forbid(unsafe_code)]

pub mod date;
pub mod ids;
pub mod record;
pub mod report;

pub use record::{DepKind, DependencyRecord, ProjectInput};
pub use report::{MultiProjectReport, PolicyVerdict, ProjectReport, VerdictKind};
