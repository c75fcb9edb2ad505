//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Parse the `--output` value.
//! - Render results as pretty JSON or human-readable text.
//!
//! Does NOT handle:
//! - Metric summary layout (see `MetricSummary`'s `Display` in the client crate).
//!
//! Invariants:
//! - JSON output is always a single valid document.
//! - Text tables come from the client's `format::render_table`.

use anyhow::{Context, Result};
use azure_rest_client::format::render_table;
use azure_rest_client::{RoleAssignment, RoleDefinition};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Pretty-printed JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    out.push('\n');
    Ok(out)
}

/// Table of custom roles: name, id, actions, assignable scopes.
pub fn format_role_definitions(roles: &[RoleDefinition]) -> String {
    if roles.is_empty() {
        return "No custom roles found.\n".to_string();
    }

    let rows: Vec<Vec<String>> = roles
        .iter()
        .map(|role| {
            vec![
                role.role_name().to_string(),
                role.name.clone(),
                role.actions().join(", "),
                role.assignable_scopes().join(", "),
            ]
        })
        .collect();

    let mut out = render_table(&["NAME", "ID", "ACTIONS", "ASSIGNABLE SCOPES"], &rows);
    out.push('\n');
    out
}

/// One-line confirmation for a created assignment.
pub fn format_role_assignment(assignment: &RoleAssignment) -> String {
    format!(
        "Assigned role {} to principal {}{}\n",
        assignment.properties.role_definition_id,
        assignment.properties.principal_id,
        assignment
            .name
            .as_deref()
            .map(|name| format!(" (assignment {})", name))
            .unwrap_or_default()
    )
}

/// Write command output to stdout.
pub fn output_result(output: &str) {
    print!("{}", output);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn role(name: &str, id: &str, actions: &[&str]) -> RoleDefinition {
        serde_json::from_value(json!({
            "name": id,
            "properties": {
                "roleName": name,
                "permissions": [{ "actions": actions }],
                "assignableScopes": ["/subscriptions/s1"]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_role_definitions_table() {
        let roles = vec![
            role("Reader Plus", "r1", &["a/read", "b/read"]),
            role("Ops", "r2", &["c/action"]),
        ];
        let out = format_role_definitions(&roles);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("Reader Plus  r1"));
        assert!(lines[1].contains("a/read, b/read"));
        assert!(lines[2].starts_with("Ops"));
    }

    #[test]
    fn test_format_role_definitions_empty() {
        assert_eq!(format_role_definitions(&[]), "No custom roles found.\n");
    }

    #[test]
    fn test_to_json_is_pretty() {
        let out = to_json(&json!({ "a": 1 })).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }
}
