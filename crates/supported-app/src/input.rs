//! Audit input parsing.
//!
//! External resolvers hand over projects as JSON: either one project object
//! or an array of them. The records inside are already fully resolved; this
//! layer only deserializes.

use anyhow::Context;
use serde_json::Value;
use supported_types::ProjectInput;

/// Parse one input document into a list of projects.
pub fn parse_projects_json(input: &str) -> anyhow::Result<Vec<ProjectInput>> {
    let value: Value = serde_json::from_str(input).context("parse audit input JSON")?;
    match value {
        Value::Array(_) => {
            serde_json::from_value(value).context("parse audit input as project array")
        }
        Value::Object(_) => {
            let project: ProjectInput =
                serde_json::from_value(value).context("parse audit input as project")?;
            Ok(vec![project])
        }
        other => anyhow::bail!(
            "audit input must be a project object or an array of projects, got {}",
            json_type_name(&other)
        ),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
