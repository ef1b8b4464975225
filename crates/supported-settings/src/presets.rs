use std::collections::BTreeMap;
use supported_domain::policy::{LtsEntry, LtsStatus};
use time::macros::date;

/// Built-in Node.js LTS schedule, used when no schedule file is supplied.
///
/// This is a point-in-time snapshot (mid-2026) of the upstream release
/// schedule. Deployments that care about freshness should ship a
/// `supported.schedule.toml` instead of relying on this table.
pub fn default_schedule() -> BTreeMap<u64, LtsEntry> {
    BTreeMap::from([
        (
            16,
            LtsEntry {
                status: LtsStatus::Unsupported,
                deprecation_date: date!(2023 - 09 - 11),
            },
        ),
        (
            18,
            LtsEntry {
                status: LtsStatus::Unsupported,
                deprecation_date: date!(2025 - 04 - 30),
            },
        ),
        (
            20,
            LtsEntry {
                status: LtsStatus::Unsupported,
                deprecation_date: date!(2026 - 04 - 30),
            },
        ),
        (
            22,
            LtsEntry {
                status: LtsStatus::Maintenance,
                deprecation_date: date!(2027 - 04 - 30),
            },
        ),
        (
            24,
            LtsEntry {
                status: LtsStatus::Active,
                deprecation_date: date!(2028 - 04 - 30),
            },
        ),
    ])
}
