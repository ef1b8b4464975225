//! SemVer Policy: a resolved version must be on the latest major line.

use crate::semver::{coerce, major_diff};
use supported_types::{DependencyRecord, PolicyVerdict, VerdictKind, ids};

pub fn run(record: &DependencyRecord, out: &mut Vec<PolicyVerdict>) {
    // Uncoercible resolved versions (file:/git:/link: dependencies) and
    // unknown latest versions (transient lookup failures) are skips:
    // "not yet evaluable" must not read as "violating".
    let Some(resolved) = record.resolved_version.as_deref().and_then(coerce) else {
        return;
    };
    let Some(latest) = record.latest_version.as_deref().and_then(coerce) else {
        return;
    };

    if major_diff(resolved, latest) == 0 {
        out.push(PolicyVerdict::supported(
            record.name.clone(),
            record.resolved_version.clone(),
            record.latest_version.clone(),
        ));
        return;
    }

    out.push(PolicyVerdict {
        name: record.name.clone(),
        resolved_version: record.resolved_version.clone(),
        latest_version: record.latest_version.clone(),
        is_supported: false,
        is_expiring_soon: None,
        kind: Some(VerdictKind::Major),
        message: Some(ids::MSG_MAJOR_VIOLATION.to_string()),
        duration: None,
        deprecation_date: None,
    });
}
