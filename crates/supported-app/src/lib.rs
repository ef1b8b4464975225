//! Use case orchestration for supported.
//!
//! This crate provides the application layer: it coordinates config
//! resolution, input parsing, and the domain engine. It is intentionally
//! thin and delegates the actual policy decisions to `supported-domain`.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod input;

pub use audit::{AuditInput, AuditOutput, report_exit_code, run_audit, serialize_report};
pub use input::parse_projects_json;
