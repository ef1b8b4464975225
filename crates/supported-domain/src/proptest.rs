//! Property-based tests for the domain crate.
//!
//! These verify aggregation invariants over arbitrary dependency lists:
//! - project support window is the AND of all verdict `isSupported` flags
//! - project expiry is gated on full support
//! - multi-project reduction preserves order and counts expiring projects

use crate::engine::{evaluate_project, evaluate_projects};
use crate::policy::EvalOptions;
use crate::test_support::{config, project, runtime};
use proptest::prelude::*;
use supported_types::{DepKind, DependencyRecord, ProjectInput};
use time::Date;
use time::macros::date;

const CURRENT: Date = date!(2021 - 03 - 31);

/// Resolved/latest pairs spanning supported, violating, and skipped records.
fn arb_version_pair() -> impl Strategy<Value = (Option<String>, Option<String>)> {
    prop_oneof![
        // same major: supported
        (1u64..20, 0u64..10, 0u64..10).prop_map(|(major, minor, patch)| {
            (
                Some(format!("{major}.{minor}.{patch}")),
                Some(format!("{major}.{minor}.{patch}")),
            )
        }),
        // behind by at least one major: violating
        (1u64..10, 1u64..5).prop_map(|(major, gap)| {
            (
                Some(format!("{major}.0.0")),
                Some(format!("{}.0.0", major + gap)),
            )
        }),
        // uncoercible resolved: skipped
        Just((Some("file:../local".to_string()), Some("2.0.0".to_string()))),
        // unknown latest: skipped
        Just((Some("1.0.0".to_string()), None)),
    ]
}

fn arb_dependency(index: usize) -> impl Strategy<Value = DependencyRecord> {
    (arb_version_pair(), prop::bool::ANY).prop_map(move |((resolved, latest), dev)| {
        DependencyRecord {
            name: format!("pkg-{index}"),
            declared_range: resolved.clone(),
            resolved_version: resolved,
            latest_version: latest,
            kind: if dev {
                DepKind::DevDependency
            } else {
                DepKind::Dependency
            },
        }
    })
}

fn arb_runtime() -> impl Strategy<Value = DependencyRecord> {
    prop_oneof![
        Just(runtime(Some("14.5.0"), Some(">=14.*"))),  // active
        Just(runtime(Some("12.22.0"), Some(">=14.*"))), // maintenance
        Just(runtime(Some("10.0.0"), Some(">=14.*"))),  // expiring soon
        Just(runtime(Some("8.11.0"), Some(">=14.*"))),  // past EOL
        Just(runtime(None, Some(">=14.*"))),            // no version declared
    ]
}

fn arb_project(name: &'static str) -> impl Strategy<Value = ProjectInput> {
    (0usize..6, arb_runtime()).prop_flat_map(move |(len, rt)| {
        let deps: Vec<_> = (0..len).map(arb_dependency).collect();
        (deps, Just(rt.clone())).prop_map(move |(mut deps, rt)| {
            deps.push(rt);
            project(name, deps)
        })
    })
}

proptest! {
    #[test]
    fn support_window_is_and_of_verdicts(input in arb_project("prop")) {
        let report =
            evaluate_project(&input, CURRENT, &config(), &EvalOptions::default()).unwrap();
        prop_assert_eq!(
            report.is_in_support_window,
            report.support_checks.iter().all(|v| v.is_supported)
        );
    }

    #[test]
    fn expiring_soon_requires_full_support(input in arb_project("prop")) {
        let report =
            evaluate_project(&input, CURRENT, &config(), &EvalOptions::default()).unwrap();
        let any_expiring = report.support_checks.iter().any(|v| v.is_expiring());
        prop_assert_eq!(
            report.is_expiring_soon,
            report.is_in_support_window && any_expiring
        );
        if !report.is_in_support_window {
            prop_assert!(!report.is_expiring_soon);
        }
    }

    #[test]
    fn evaluation_is_deterministic(input in arb_project("prop")) {
        let a = evaluate_project(&input, CURRENT, &config(), &EvalOptions::default()).unwrap();
        let b = evaluate_project(&input, CURRENT, &config(), &EvalOptions::default()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn multi_project_reduction_is_consistent(
        first in arb_project("first"),
        second in arb_project("second"),
    ) {
        let report = evaluate_projects(
            &[first, second],
            CURRENT,
            &config(),
            &EvalOptions::default(),
        )
        .unwrap();

        prop_assert_eq!(report.projects.len(), 2);
        prop_assert_eq!(report.projects[0].project_name.as_str(), "first");
        prop_assert_eq!(report.projects[1].project_name.as_str(), "second");
        prop_assert_eq!(
            report.is_in_support_window,
            report.projects.iter().all(|p| p.is_in_support_window)
        );
        prop_assert_eq!(
            report.expiring_soon_count as usize,
            report.projects.iter().filter(|p| p.is_expiring_soon).count()
        );
    }
}
