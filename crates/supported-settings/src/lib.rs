//! Config parsing and schedule resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. The resolved output is the read-only
//! `EffectiveConfig` the engine consumes.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{MajorConfig, ScheduleConfigV1};
pub use presets::default_schedule;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `supported.schedule.toml` (or equivalent) into a typed model.
pub fn parse_schedule_toml(input: &str) -> anyhow::Result<ScheduleConfigV1> {
    let cfg: ScheduleConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (preset schedule + config
/// file + CLI overrides).
pub fn resolve_config(
    cfg: ScheduleConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
