//! Contract-violation errors.
//!
//! These fire only for malformed engine input — a caller bug, not a policy
//! condition. Per-dependency data problems (uncoercible versions, unknown
//! latest) never error; they are skipped inside the rules.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("project '{project}' has an empty dependency list; the runtime entry must always be present")]
    EmptyDependencyList { project: String },

    #[error("project '{project}' is missing its runtime entry")]
    MissingRuntimeEntry { project: String },

    #[error("project '{project}' has {count} runtime entries, expected exactly one")]
    DuplicateRuntimeEntry { project: String, count: usize },

    #[error("project '{project}' must list its runtime entry last")]
    RuntimeEntryNotLast { project: String },

    #[error("project '{project}' declares dependency '{name}' more than once")]
    DuplicateDependency { project: String, name: String },
}
