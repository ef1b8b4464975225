use crate::policy::{EffectiveConfig, LtsEntry, LtsStatus};
use std::collections::BTreeMap;
use supported_types::{DepKind, DependencyRecord, ProjectInput};
use time::macros::date;

pub fn dep(name: &str, resolved: &str, latest: &str) -> DependencyRecord {
    DependencyRecord {
        name: name.to_string(),
        declared_range: Some(format!("^{resolved}")),
        resolved_version: Some(resolved.to_string()),
        latest_version: Some(latest.to_string()),
        kind: DepKind::Dependency,
    }
}

pub fn dev_dep(name: &str, resolved: &str, latest: &str) -> DependencyRecord {
    DependencyRecord {
        kind: DepKind::DevDependency,
        ..dep(name, resolved, latest)
    }
}

pub fn runtime(resolved: Option<&str>, latest: Option<&str>) -> DependencyRecord {
    DependencyRecord {
        name: "node".to_string(),
        declared_range: resolved.map(str::to_string),
        resolved_version: resolved.map(str::to_string),
        latest_version: latest.map(str::to_string),
        kind: DepKind::Runtime,
    }
}

pub fn project(name: &str, dependencies: Vec<DependencyRecord>) -> ProjectInput {
    ProjectInput {
        name: name.to_string(),
        path: format!("/projects/{name}"),
        dependencies,
    }
}

/// Schedule snapshot pinned to the 2021-03-31 reference date: node 10 is one
/// month from EOL, 12 is maintenance, 14 is the active LTS, 15 is the current
/// line, 8 is long unsupported.
pub fn schedule() -> BTreeMap<u64, LtsEntry> {
    BTreeMap::from([
        (
            10,
            LtsEntry {
                status: LtsStatus::Maintenance,
                deprecation_date: date!(2021 - 04 - 30),
            },
        ),
        (
            12,
            LtsEntry {
                status: LtsStatus::Maintenance,
                deprecation_date: date!(2022 - 04 - 30),
            },
        ),
        (
            14,
            LtsEntry {
                status: LtsStatus::Active,
                deprecation_date: date!(2023 - 04 - 30),
            },
        ),
        (
            15,
            LtsEntry {
                status: LtsStatus::Active,
                deprecation_date: date!(2022 - 06 - 01),
            },
        ),
        (
            8,
            LtsEntry {
                status: LtsStatus::Unsupported,
                deprecation_date: date!(2019 - 12 - 31),
            },
        ),
    ])
}

pub fn config() -> EffectiveConfig {
    EffectiveConfig {
        schedule: schedule(),
        expiry_horizon_days: crate::expiry::DEFAULT_EXPIRY_HORIZON_DAYS,
    }
}
