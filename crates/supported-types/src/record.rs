//! Audit input: already-resolved dependency records.
//!
//! Resolution (manifest + lockfile) and registry lookups happen in external
//! collaborators; by the time records reach this workspace every field is
//! plain data.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Discriminant for dependency records, matched exhaustively by policy rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DepKind {
    Dependency,
    DevDependency,
    Runtime,
}

/// One entry to be checked against the support policies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    pub name: String,

    /// Range the project declared (`^1.0.3`; engines/volta style for runtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_range: Option<String>,

    /// Concrete locked version. For the runtime entry resolvers place the
    /// declared range here; absence means "no version declared".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_version: Option<String>,

    /// Newest version known to be available; for the runtime entry, the
    /// currently-recommended LTS range string (e.g. `>=14.*`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,

    #[serde(rename = "type")]
    pub kind: DepKind,
}

impl DependencyRecord {
    pub fn is_runtime(&self) -> bool {
        self.kind == DepKind::Runtime
    }
}

/// One project's worth of audit input.
///
/// Input-contract invariants (violations are caller bugs, not policy states):
/// - `dependencies` is non-empty and names are unique;
/// - exactly one runtime record exists and it is the last entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: String,
    pub path: String,
    pub dependencies: Vec<DependencyRecord>,
}
