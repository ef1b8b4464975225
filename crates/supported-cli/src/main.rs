//! CLI entry point for supported.
//!
//! This module is intentionally thin: it handles argument parsing, file I/O,
//! and exit codes. All audit logic lives in the `supported-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use supported_app::{
    AuditInput, parse_projects_json, report_exit_code, run_audit, serialize_report,
};
use supported_settings::Overrides;
use supported_types::date::parse_date;

#[derive(Parser, Debug)]
#[command(
    name = "supported",
    version,
    about = "Support-window policy audit for resolved dependency sets"
)]
struct Cli {
    /// Audit input files (JSON: one project object or an array of projects,
    /// produced by an external dependency resolver).
    #[arg(required = true)]
    inputs: Vec<Utf8PathBuf>,

    /// Path to the runtime LTS schedule TOML. A missing file falls back to
    /// the built-in schedule snapshot.
    #[arg(long, default_value = "supported.schedule.toml")]
    schedule: Utf8PathBuf,

    /// Reference date for expiry calculations (yyyy-mm-dd); defaults to today.
    #[arg(long, short = 'c')]
    current_date: Option<String>,

    /// Restrict the emitted checks to unsupported entries.
    #[arg(long, short = 'u', conflicts_with_all = ["supported", "expiring"])]
    unsupported: bool,

    /// Restrict the emitted checks to supported entries.
    #[arg(long, short = 's', conflicts_with = "expiring")]
    supported: bool,

    /// Restrict the emitted checks to expiring-soon entries.
    #[arg(long, short = 'e')]
    expiring: bool,

    /// Override the expiring-soon horizon, in days.
    #[arg(long)]
    expiry_horizon_days: Option<i64>,
}

impl Cli {
    fn filter(&self) -> Option<&'static str> {
        if self.unsupported {
            Some("unsupported")
        } else if self.supported {
            Some("supported")
        } else if self.expiring {
            Some("expiring")
        } else {
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let current_date = cli
        .current_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .context("invalid --current-date, expected yyyy-mm-dd")?;

    // Missing schedule file is allowed; the built-in preset applies.
    let schedule_text = std::fs::read_to_string(&cli.schedule).unwrap_or_default();

    let mut projects = Vec::new();
    for path in &cli.inputs {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read audit input: {path}"))?;
        let parsed =
            parse_projects_json(&text).with_context(|| format!("parse audit input: {path}"))?;
        projects.extend(parsed);
    }

    let output = run_audit(AuditInput {
        projects,
        schedule_text: &schedule_text,
        current_date,
        overrides: Overrides {
            expiry_horizon_days: cli.expiry_horizon_days,
            filter: cli.filter().map(str::to_string),
        },
    })?;

    print!("{}", serialize_report(&output.report)?);

    let code = report_exit_code(&output.report);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
