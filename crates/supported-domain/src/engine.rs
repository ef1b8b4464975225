use crate::checks;
use crate::error::EngineError;
use crate::policy::{EffectiveConfig, EvalOptions};
use std::collections::BTreeSet;
use supported_types::{MultiProjectReport, PolicyVerdict, ProjectInput, ProjectReport};
use time::Date;

/// Evaluate every dependency of one project against the applicable policy
/// rules and aggregate the verdicts.
///
/// Verdict order is the input declaration order with the runtime entry last
/// (an input-contract invariant, validated here). A filter in `options`
/// restricts only the emitted `supportChecks`; the aggregation booleans are
/// always computed over the full verdict set.
pub fn evaluate_project(
    project: &ProjectInput,
    current_date: Date,
    cfg: &EffectiveConfig,
    options: &EvalOptions,
) -> Result<ProjectReport, EngineError> {
    validate_input(project)?;

    let mut verdicts: Vec<PolicyVerdict> = Vec::with_capacity(project.dependencies.len());
    for record in &project.dependencies {
        checks::run_all(record, current_date, cfg, &mut verdicts);
    }

    let is_in_support_window = verdicts.iter().all(|v| v.is_supported);
    let is_expiring_soon = is_in_support_window && verdicts.iter().any(|v| v.is_expiring());

    let support_checks = match options.filter {
        Some(filter) => verdicts.into_iter().filter(|v| filter.keeps(v)).collect(),
        None => verdicts,
    };

    Ok(ProjectReport {
        project_name: project.name.clone(),
        project_path: project.path.clone(),
        is_in_support_window,
        is_expiring_soon,
        support_checks,
    })
}

/// Pure reduction over per-project evaluations. The output `projects`
/// sequence preserves the caller-supplied input order.
pub fn evaluate_projects(
    projects: &[ProjectInput],
    current_date: Date,
    cfg: &EffectiveConfig,
    options: &EvalOptions,
) -> Result<MultiProjectReport, EngineError> {
    let mut reports = Vec::with_capacity(projects.len());
    for project in projects {
        reports.push(evaluate_project(project, current_date, cfg, options)?);
    }

    let is_in_support_window = reports.iter().all(|r| r.is_in_support_window);
    let expiring_soon_count = reports.iter().filter(|r| r.is_expiring_soon).count() as u32;

    Ok(MultiProjectReport {
        is_in_support_window,
        expiring_soon_count,
        projects: reports,
    })
}

fn validate_input(project: &ProjectInput) -> Result<(), EngineError> {
    if project.dependencies.is_empty() {
        return Err(EngineError::EmptyDependencyList {
            project: project.name.clone(),
        });
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for record in &project.dependencies {
        if !seen.insert(record.name.as_str()) {
            return Err(EngineError::DuplicateDependency {
                project: project.name.clone(),
                name: record.name.clone(),
            });
        }
    }

    let runtime_count = project
        .dependencies
        .iter()
        .filter(|r| r.is_runtime())
        .count();
    match runtime_count {
        0 => {
            return Err(EngineError::MissingRuntimeEntry {
                project: project.name.clone(),
            });
        }
        1 => {}
        count => {
            return Err(EngineError::DuplicateRuntimeEntry {
                project: project.name.clone(),
                count,
            });
        }
    }

    let last_is_runtime = project
        .dependencies
        .last()
        .is_some_and(|r| r.is_runtime());
    if !last_is_runtime {
        return Err(EngineError::RuntimeEntryNotLast {
            project: project.name.clone(),
        });
    }

    Ok(())
}
