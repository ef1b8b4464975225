//! Effective engine configuration: the injected LTS schedule, the expiry
//! horizon, and presentation filters threaded through the evaluation call.

use std::collections::BTreeMap;
use supported_types::PolicyVerdict;
use time::Date;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LtsStatus {
    Active,
    Maintenance,
    Unsupported,
}

/// One runtime release line in the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LtsEntry {
    pub status: LtsStatus,
    pub deprecation_date: Date,
}

/// Read-only configuration for one evaluation run.
///
/// The schedule is an externally maintained table (injected at construction,
/// never hardcoded in rules and never mutated during evaluation), keyed by
/// runtime major version.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub schedule: BTreeMap<u64, LtsEntry>,
    pub expiry_horizon_days: i64,
}

impl EffectiveConfig {
    pub fn lts_entry(&self, major: u64) -> Option<LtsEntry> {
        self.schedule.get(&major).copied()
    }
}

/// Verdict filter for the emitted `supportChecks`.
///
/// Filtering is presentation-layer; it is threaded through the engine call
/// for convenience but applies only after every dependency has been
/// evaluated, so aggregation always reflects the full verdict set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Supported,
    Unsupported,
    Expiring,
}

impl Filter {
    pub fn keeps(self, verdict: &PolicyVerdict) -> bool {
        match self {
            Filter::Supported => verdict.is_supported,
            Filter::Unsupported => !verdict.is_supported,
            Filter::Expiring => verdict.is_expiring(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EvalOptions {
    pub filter: Option<Filter>,
}
