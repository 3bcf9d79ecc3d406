//! Status and confirmation message types for operation feedback.

use std::{fmt, path::PathBuf};

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::validate::Report;

/// Wrapper type for displaying a one-line confirmation or failure.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "✅" } else { "❌" }, self.message)
    }
}

/// Outcome of validating a plan file.
///
/// Serializes as `{"valid", "path", "error", "json_path", "issues"}` where
/// `error` and `json_path` describe the first error, or are `null`.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub path: PathBuf,
    pub report: Report,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let first = self.report.first_error();
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("valid", &self.is_valid())?;
        map.serialize_entry("path", &self.path)?;
        map.serialize_entry("error", &first.map(|issue| &issue.message))?;
        map.serialize_entry("json_path", &first.map(|issue| &issue.path))?;
        map.serialize_entry("issues", &self.report.issues)?;
        map.end()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(
                f,
                "{}",
                OperationStatus::success(format!("{} is valid", self.path.display()))
            )?;
        } else {
            write!(
                f,
                "{}",
                OperationStatus::failure(format!("Validation failed for {}:", self.path.display()))
            )?;
            for issue in self.report.errors() {
                writeln!(f, "   {}", issue.message)?;
                if !issue.path.is_empty() {
                    writeln!(f, "   Path: {}", issue.path)?;
                }
            }
        }

        for issue in self.report.warnings() {
            writeln!(f, "⚠️ {issue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::validate::validate;

    fn result_for(document: serde_json::Value) -> ValidationResult {
        ValidationResult {
            path: PathBuf::from("plan.json"),
            report: validate(&document),
        }
    }

    fn document(status: &str) -> serde_json::Value {
        json!({
            "meta": {
                "project": "Demo",
                "version": "1.0.0",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            },
            "phases": [{
                "id": "1",
                "name": "Build",
                "tasks": [{ "id": "1.1.1", "title": "Code", "status": status, "depends_on": ["1.1.9"] }]
            }]
        })
    }

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert_eq!(success.to_string(), "✅ Operation completed\n");

        let failure = OperationStatus::failure("Operation failed".to_string());
        assert_eq!(failure.to_string(), "❌ Operation failed\n");
    }

    #[test]
    fn test_valid_document_reports_warnings() {
        let result = result_for(document("pending"));
        let output = result.to_string();

        assert!(result.is_valid());
        assert!(output.starts_with("✅ plan.json is valid\n"));
        assert!(output.contains("⚠️ warning at phases.0.tasks.0.depends_on.0"));
    }

    #[test]
    fn test_invalid_document_lists_errors_with_paths() {
        let result = result_for(document("finished"));
        let output = result.to_string();

        assert!(!result.is_valid());
        assert!(output.starts_with("❌ Validation failed for plan.json:\n"));
        assert!(output.contains("   Path: phases.0.tasks.0.status"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(result_for(document("finished"))).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["path"], "plan.json");
        assert_eq!(value["json_path"], "phases.0.tasks.0.status");
        assert!(value["error"].is_string());

        let value = serde_json::to_value(result_for(document("pending"))).unwrap();
        assert_eq!(value["valid"], true);
        assert!(value["error"].is_null());
        assert_eq!(value["issues"].as_array().unwrap().len(), 1);
    }
}
