//! node LTS Policy: the declared runtime range must sit on a maintained
//! release line.
//!
//! The schedule is authoritative for majors it lists; majors newer than the
//! table are accepted when the declared range satisfies the recommended
//! active range carried in `latestVersion`.

use crate::expiry::{Expiry, compute_expiry, remaining_quarters};
use crate::policy::{EffectiveConfig, LtsEntry, LtsStatus};
use crate::semver::{coerce, satisfies_range};
use supported_types::{DependencyRecord, PolicyVerdict, VerdictKind, ids};
use time::Date;

pub fn run(
    record: &DependencyRecord,
    current_date: Date,
    cfg: &EffectiveConfig,
    out: &mut Vec<PolicyVerdict>,
) {
    // Absent, sentinel, or uncoercible declarations are a warning, not a
    // failure: many valid projects omit an engines/volta range entirely.
    let declared = record
        .resolved_version
        .as_deref()
        .filter(|v| *v != ids::NO_VERSION_SENTINEL);
    let Some(range) = declared else {
        out.push(no_version_verdict(record));
        return;
    };
    let Some(version) = coerce(range) else {
        out.push(no_version_verdict(record));
        return;
    };

    match cfg.lts_entry(version.major) {
        Some(entry) => {
            let expiry = compute_expiry(
                entry.deprecation_date,
                current_date,
                cfg.expiry_horizon_days,
            );
            if entry.status == LtsStatus::Unsupported || expiry.remaining_days < 0 {
                out.push(out_of_window_verdict(record, range, Some((entry, expiry))));
            } else if expiry.is_expiring_soon {
                // Takes message precedence over the maintenance state; the
                // verdict stays supported either way.
                out.push(expiring_verdict(record, range, expiry));
            } else if entry.status == LtsStatus::Active {
                out.push(PolicyVerdict::supported(
                    record.name.clone(),
                    record.resolved_version.clone(),
                    record.latest_version.clone(),
                ));
            } else {
                out.push(maintenance_verdict(record));
            }
        }
        None => {
            let active = record.latest_version.as_deref();
            if active.is_some_and(|active| satisfies_range(version, active)) {
                out.push(PolicyVerdict::supported(
                    record.name.clone(),
                    record.resolved_version.clone(),
                    record.latest_version.clone(),
                ));
            } else {
                out.push(out_of_window_verdict(record, range, None));
            }
        }
    }
}

fn no_version_verdict(record: &DependencyRecord) -> PolicyVerdict {
    PolicyVerdict {
        name: record.name.clone(),
        resolved_version: record.resolved_version.clone(),
        latest_version: record.latest_version.clone(),
        is_supported: true,
        is_expiring_soon: None,
        kind: Some(VerdictKind::NoVersion),
        message: Some(ids::MSG_NO_NODE_VERSION.to_string()),
        duration: None,
        deprecation_date: None,
    }
}

fn maintenance_verdict(record: &DependencyRecord) -> PolicyVerdict {
    PolicyVerdict {
        name: record.name.clone(),
        resolved_version: record.resolved_version.clone(),
        latest_version: record.latest_version.clone(),
        is_supported: true,
        is_expiring_soon: None,
        kind: Some(VerdictKind::LtsMaintenance),
        message: Some(ids::MSG_MAINTENANCE_LTS.to_string()),
        duration: None,
        deprecation_date: None,
    }
}

fn expiring_verdict(record: &DependencyRecord, range: &str, expiry: Expiry) -> PolicyVerdict {
    let quarters = remaining_quarters(expiry.remaining_days);
    let unit = if quarters == 1 { "qtr" } else { "qtrs" };
    PolicyVerdict {
        name: record.name.clone(),
        resolved_version: record.resolved_version.clone(),
        latest_version: record.latest_version.clone(),
        is_supported: true,
        is_expiring_soon: Some(true),
        kind: Some(VerdictKind::LtsExpiringSoon),
        message: Some(format!(
            "version/version-range {range} will be deprecated within {quarters} {unit}"
        )),
        duration: Some(expiry.remaining_days),
        deprecation_date: Some(expiry.deprecation_date),
    }
}

fn out_of_window_verdict(
    record: &DependencyRecord,
    range: &str,
    schedule_hit: Option<(LtsEntry, Expiry)>,
) -> PolicyVerdict {
    let (message, duration, deprecation_date) = match schedule_hit {
        Some((entry, expiry)) if expiry.remaining_days < 0 => (
            format!(
                "version/version-range {range} was deprecated on {}",
                supported_types::date::format_date(entry.deprecation_date)
            ),
            Some(expiry.remaining_days),
            Some(entry.deprecation_date),
        ),
        // Non-LTS line flagged unsupported in the schedule ahead of its EOL.
        Some((entry, expiry)) => (
            format!("version/version-range {range} is not a supported LTS release"),
            Some(expiry.remaining_days),
            Some(entry.deprecation_date),
        ),
        None => (
            format!("version/version-range {range} is not a supported LTS release"),
            None,
            None,
        ),
    };
    PolicyVerdict {
        name: record.name.clone(),
        resolved_version: record.resolved_version.clone(),
        latest_version: record.latest_version.clone(),
        is_supported: false,
        is_expiring_soon: None,
        kind: Some(VerdictKind::Lts),
        message: Some(message),
        duration,
        deprecation_date,
    }
}
