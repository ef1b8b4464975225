//! The emitted report: the stable JSON contract.
//!
//! Field names (camelCase) and the AND/gated-OR aggregation semantics are a
//! compatibility surface for downstream rendering and automation; renaming
//! or reshaping any field here is a breaking change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::Date;

/// Classification of a non-trivial verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum VerdictKind {
    /// Resolved major version is behind the latest major.
    #[serde(rename = "major")]
    Major,
    /// Runtime range falls outside every maintained LTS line.
    #[serde(rename = "lts")]
    Lts,
    /// Runtime range sits on a maintenance LTS line.
    #[serde(rename = "lts-maintenance")]
    LtsMaintenance,
    /// Runtime line reaches end-of-life within the expiry horizon.
    #[serde(rename = "lts-expiring-soon")]
    LtsExpiringSoon,
    /// Project declares no runtime version at all.
    #[serde(rename = "no-version")]
    NoVersion,
}

/// Outcome of one policy rule applied to one dependency record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyVerdict {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,

    pub is_supported: bool,

    /// Only meaningful while supported; omitted from the wire unless true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expiring_soon: Option<bool>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VerdictKind>,

    /// Required whenever unsupported or expiring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Whole days until the scheduled deprecation; negative once past it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[schemars(with = "Option<String>")]
    #[serde(
        default,
        with = "crate::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deprecation_date: Option<Date>,
}

impl PolicyVerdict {
    /// A clean pass: supported, nothing to explain.
    pub fn supported(
        name: impl Into<String>,
        resolved_version: Option<String>,
        latest_version: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resolved_version,
            latest_version,
            is_supported: true,
            is_expiring_soon: None,
            kind: None,
            message: None,
            duration: None,
            deprecation_date: None,
        }
    }

    pub fn is_expiring(&self) -> bool {
        self.is_expiring_soon == Some(true)
    }
}

/// Aggregation across all dependencies of one project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub project_name: String,
    pub project_path: String,

    /// True iff every verdict is supported.
    pub is_in_support_window: bool,

    /// True iff fully supported AND at least one verdict is expiring.
    pub is_expiring_soon: bool,

    /// Verdicts in declaration order, runtime entry last. Skipped
    /// dependencies (uncoercible versions) contribute nothing.
    pub support_checks: Vec<PolicyVerdict>,
}

/// Top-level result across all audited projects, in caller input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultiProjectReport {
    pub is_in_support_window: bool,
    pub expiring_soon_count: u32,
    pub projects: Vec<ProjectReport>,
}
