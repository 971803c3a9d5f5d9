//! Per-file validation results and the aggregate content report.

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Validation outcome for one content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileValidationResult {
    pub file_path: String,
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl FileValidationResult {
    /// A result whose validity follows from `errors` being empty.
    #[must_use]
    pub fn new(
        file_path: impl Into<String>,
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationError>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_files: usize,
    pub valid_files: usize,
    pub invalid_files: usize,
    pub total_errors: usize,
}

/// Aggregate validation result for a content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentValidationReport {
    pub valid: bool,
    pub files: Vec<FileValidationResult>,
    pub summary: ReportSummary,
}

/// Summarize per-file results. The report is valid when no file is invalid.
#[must_use]
pub fn create_validation_report(files: Vec<FileValidationResult>) -> ContentValidationReport {
    let total_files = files.len();
    let valid_files = files.iter().filter(|f| f.valid).count();
    let invalid_files = total_files - valid_files;
    let total_errors = files.iter().map(|f| f.errors.len()).sum();

    ContentValidationReport {
        valid: invalid_files == 0,
        files,
        summary: ReportSummary {
            total_files,
            valid_files,
            invalid_files,
            total_errors,
        },
    }
}

/// One display line per error: `field: message (received: <json>)`.
#[must_use]
pub fn format_validation_errors(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Render a report as a console block.
#[must_use]
pub fn format_validation_report(report: &ContentValidationReport) -> String {
    let mut lines: Vec<String> = vec![
        "Content Validation Report".into(),
        "=========================".into(),
        String::new(),
        format!("Total files: {}", report.summary.total_files),
        format!("Valid files: {}", report.summary.valid_files),
        format!("Invalid files: {}", report.summary.invalid_files),
        format!("Total errors: {}", report.summary.total_errors),
        String::new(),
    ];

    if report.summary.invalid_files > 0 {
        lines.push("Validation Errors:".into());
        lines.push("------------------".into());
    } else {
        lines.push("✓ All content files are valid!".into());
    }

    for file in &report.files {
        if !file.valid {
            lines.push(String::new());
            lines.push(format!("{}:", file.file_path));
            for error in &file.errors {
                lines.push(format!("  ✗ {}: {}", error.field, error.message));
            }
        }

        if !file.warnings.is_empty() {
            lines.push(String::new());
            lines.push(format!("{} (warnings):", file.file_path));
            for warning in &file.warnings {
                lines.push(format!("  ⚠ {}: {}", warning.field, warning.message));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::types::ErrorKind;

    fn three_files() -> Vec<FileValidationResult> {
        vec![
            FileValidationResult::new("profile.json", vec![], vec![]),
            FileValidationResult::new(
                "projects/a.json",
                vec![ValidationError::new("tech", "too short", ErrorKind::TooSmall).with_value(json!([]))],
                vec![],
            ),
            FileValidationResult::new(
                "projects/b.json",
                vec![],
                vec![ValidationError::new(
                    "description",
                    "Optional field 'description' is empty but recommended",
                    ErrorKind::MissingRecommended,
                )],
            ),
        ]
    }

    #[test]
    fn summary_counts_files_and_errors() {
        let report = create_validation_report(three_files());
        assert_eq!(
            report.summary,
            ReportSummary {
                total_files: 3,
                valid_files: 2,
                invalid_files: 1,
                total_errors: 1,
            }
        );
        assert!(!report.valid);
    }

    #[test]
    fn empty_report_is_valid() {
        let report = create_validation_report(Vec::new());
        assert!(report.valid);
        assert_eq!(report.summary.total_files, 0);
    }

    #[test]
    fn error_lines_include_received_value() {
        let errors = vec![
            ValidationError::new("tech", "too short", ErrorKind::TooSmall).with_value(json!([])),
            ValidationError::new("slug", "required", ErrorKind::Required),
        ];
        assert_eq!(
            format_validation_errors(&errors),
            vec![
                "tech: too short (received: [])".to_string(),
                "slug: required".to_string(),
            ]
        );
    }

    #[test]
    fn formatted_report_groups_errors_by_file() {
        let text = format_validation_report(&create_validation_report(three_files()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Content Validation Report");
        assert!(lines.contains(&"Total files: 3"));
        assert!(lines.contains(&"Invalid files: 1"));
        assert!(lines.contains(&"Validation Errors:"));
        assert!(lines.contains(&"projects/a.json:"));
        assert!(lines.contains(&"  ✗ tech: too short"));
        assert!(lines.contains(&"projects/b.json (warnings):"));
        assert!(!lines.contains(&"profile.json:"));
    }

    #[test]
    fn formatted_valid_report_says_so() {
        let report = create_validation_report(vec![FileValidationResult::new(
            "profile.json",
            vec![],
            vec![],
        )]);
        let text = format_validation_report(&report);
        assert!(text.contains("✓ All content files are valid!"));
        assert!(!text.contains("Validation Errors:"));
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = create_validation_report(three_files());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["summary"]["totalFiles"], 3);
        assert_eq!(value["files"][1]["filePath"], "projects/a.json");
    }
}
