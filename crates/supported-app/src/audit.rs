//! The `audit` use case: resolve config, evaluate, serialize.

use anyhow::Context;
use supported_domain::evaluate_projects;
use supported_settings::Overrides;
use supported_types::{MultiProjectReport, ProjectInput};
use time::{Date, OffsetDateTime};

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Already-parsed projects, in the order the caller supplied them.
    pub projects: Vec<ProjectInput>,
    /// Schedule config file contents (empty string if not found).
    pub schedule_text: &'a str,
    /// Reference date; `None` samples today (the engine itself never does).
    pub current_date: Option<Date>,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: MultiProjectReport,
    pub current_date: Date,
}

/// Run the audit use case: parse config, evaluate every project, aggregate.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    // Parse config (empty is allowed, the preset schedule applies).
    let cfg = if input.schedule_text.trim().is_empty() {
        supported_settings::ScheduleConfigV1::default()
    } else {
        supported_settings::parse_schedule_toml(input.schedule_text)
            .context("parse schedule config")?
    };
    let resolved = supported_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve schedule config")?;

    let current_date = input
        .current_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let report = evaluate_projects(
        &input.projects,
        current_date,
        &resolved.effective,
        &resolved.options,
    )
    .context("evaluate projects")?;

    Ok(AuditOutput {
        report,
        current_date,
    })
}

/// Exit code for the report: out-of-window audits fail the invoking pipeline.
pub fn report_exit_code(report: &MultiProjectReport) -> i32 {
    if report.is_in_support_window { 0 } else { 1 }
}

pub fn serialize_report(report: &MultiProjectReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}
