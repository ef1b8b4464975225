//! Stable identifiers and fixed message strings.
//!
//! Policy names and the fixed messages are part of the report contract
//! consumed by downstream renderers; changing them is a breaking change.

// Policies
pub const POLICY_SEMVER: &str = "SemVer Policy";
pub const POLICY_NODE_LTS: &str = "node LTS Policy";

/// Name of the runtime pseudo-dependency synthesized by resolvers.
pub const RUNTIME_NAME: &str = "node";

/// Version sentinel resolvers emit when a project declares no runtime range.
pub const NO_VERSION_SENTINEL: &str = "0.0.0";

// Fixed messages
pub const MSG_MAJOR_VIOLATION: &str = "violated: major version must be within 1 year of latest";
pub const MSG_NO_NODE_VERSION: &str =
    "No node version mentioned in the package.json. Please add engines/volta";
pub const MSG_MAINTENANCE_LTS: &str = "Using maintenance LTS. Update to latest LTS";

// Config
pub const SCHEMA_SCHEDULE_V1: &str = "supported.schedule.v1";
