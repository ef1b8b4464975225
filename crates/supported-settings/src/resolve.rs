use crate::{model::ScheduleConfigV1, presets};
use anyhow::Context;
use std::collections::BTreeMap;
use supported_domain::expiry::DEFAULT_EXPIRY_HORIZON_DAYS;
use supported_domain::policy::{EffectiveConfig, EvalOptions, Filter, LtsEntry, LtsStatus};
use supported_types::date::parse_date;
use supported_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub expiry_horizon_days: Option<i64>,
    pub filter: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub options: EvalOptions,
}

pub fn resolve_config(
    cfg: ScheduleConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != ids::SCHEMA_SCHEDULE_V1 {
            anyhow::bail!(
                "unknown schedule schema: {schema} (expected {})",
                ids::SCHEMA_SCHEDULE_V1
            );
        }
    }

    let schedule = if cfg.majors.is_empty() {
        presets::default_schedule()
    } else {
        let mut schedule = BTreeMap::new();
        for (major, entry) in &cfg.majors {
            let major: u64 = major
                .parse()
                .with_context(|| format!("invalid runtime major version: {major}"))?;
            let status = parse_status(&entry.status)
                .with_context(|| format!("invalid status for major {major}"))?;
            let deprecation_date = parse_date(&entry.deprecation_date)
                .with_context(|| format!("invalid deprecation_date for major {major}"))?;
            schedule.insert(
                major,
                LtsEntry {
                    status,
                    deprecation_date,
                },
            );
        }
        schedule
    };

    let expiry_horizon_days = overrides
        .expiry_horizon_days
        .or(cfg.expiry_horizon_days)
        .unwrap_or(DEFAULT_EXPIRY_HORIZON_DAYS);
    if expiry_horizon_days < 0 {
        anyhow::bail!("expiry_horizon_days must be non-negative, got {expiry_horizon_days}");
    }

    let filter = overrides
        .filter
        .as_deref()
        .map(parse_filter)
        .transpose()?;

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            schedule,
            expiry_horizon_days,
        },
        options: EvalOptions { filter },
    })
}

fn parse_status(input: &str) -> anyhow::Result<LtsStatus> {
    match input {
        "active" => Ok(LtsStatus::Active),
        "maintenance" => Ok(LtsStatus::Maintenance),
        "unsupported" => Ok(LtsStatus::Unsupported),
        other => anyhow::bail!("unknown LTS status: {other}"),
    }
}

fn parse_filter(input: &str) -> anyhow::Result<Filter> {
    match input {
        "supported" => Ok(Filter::Supported),
        "unsupported" => Ok(Filter::Unsupported),
        "expiring" => Ok(Filter::Expiring),
        other => anyhow::bail!("unknown filter: {other} (expected supported|unsupported|expiring)"),
    }
}
