use crate::policy::EffectiveConfig;
use supported_types::{DepKind, DependencyRecord, PolicyVerdict};
use time::Date;

mod node_lts;
mod semver_policy;


/// Dispatch the applicable policy rule for one record. Rules may decline to
/// push a verdict (uncoercible or unknown versions are skips, not failures).
pub fn run_all(
    record: &DependencyRecord,
    current_date: Date,
    cfg: &EffectiveConfig,
    out: &mut Vec<PolicyVerdict>,
) {
    match record.kind {
        DepKind::Dependency | DepKind::DevDependency => semver_policy::run(record, out),
        DepKind::Runtime => node_lts::run(record, current_date, cfg, out),
    }
}
