use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `supported.schedule.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Validation happens during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleConfigV1 {
    /// Optional schema string for tooling (`supported.schedule.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Days of remaining support below which a line counts as expiring soon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_horizon_days: Option<i64>,

    /// Map of runtime major version -> release line config. A non-empty map
    /// replaces the built-in preset wholesale; the file IS the schedule.
    #[serde(default)]
    pub majors: BTreeMap<String, MajorConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MajorConfig {
    /// `active`, `maintenance`, or `unsupported`.
    pub status: String,

    /// End-of-life date, `yyyy-mm-dd`.
    pub deprecation_date: String,
}
