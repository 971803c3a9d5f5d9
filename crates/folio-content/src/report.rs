//! Whole-tree validation: every content file checked, nothing skipped.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use folio_core::enums::ContentKind;
use folio_schema::{
    ContentRules, ContentValidationReport, ErrorKind, FileValidationResult, Schema,
    ValidationError, create_validation_report, validate_content_with_warnings,
    validate_with_details,
};
use serde::de::DeserializeOwned;

use crate::error::ContentError;
use crate::loader::{ContentLoader, read_json};

/// Project fields that should be filled in even though they are optional.
pub const RECOMMENDED_PROJECT_FIELDS: [&str; 4] = ["description", "images", "metrics", "startDate"];

impl ContentLoader {
    /// Validate every file under the content root.
    ///
    /// Produces one result per single-file source, per project file, and per
    /// case study. Decode and I/O failures become file errors rather than
    /// aborting the run.
    #[must_use]
    pub fn validate_all_content(&self) -> ContentValidationReport {
        let mut files = vec![
            self.check_document(ContentKind::Profile, &self.schemas.profile),
            self.check_document(ContentKind::Skills, &self.schemas.skills),
            self.check_document(ContentKind::Experience, &self.schemas.experience),
            self.check_document(ContentKind::Certifications, &self.schemas.certifications),
        ];

        let (project_results, project_slugs) = self.check_projects();
        files.extend(project_results);
        files.extend(self.check_case_studies(&project_slugs));

        let report = create_validation_report(files);
        tracing::info!(
            total = report.summary.total_files,
            invalid = report.summary.invalid_files,
            errors = report.summary.total_errors,
            "content validation finished"
        );
        report
    }

    fn check_document<T>(&self, kind: ContentKind, schema: &Schema<T>) -> FileValidationResult
    where
        T: DeserializeOwned + ContentRules,
    {
        let path = self.path_for(kind);
        let errors = match read_json(&path) {
            Ok(value) => validate_with_details(&value, schema).err().unwrap_or_default(),
            Err(error) => error_entries(&error),
        };
        FileValidationResult::new(self.display_path(&path), errors, Vec::new())
    }

    /// Results for each project file, plus the slugs of the valid ones.
    fn check_projects(&self) -> (Vec<FileValidationResult>, BTreeSet<String>) {
        let files = match self.list_records(ContentKind::Projects) {
            Ok(files) => files,
            Err(error) => {
                let dir = self.path_for(ContentKind::Projects);
                let result =
                    FileValidationResult::new(self.display_path(&dir), error_entries(&error), vec![]);
                return (vec![result], BTreeSet::new());
            }
        };

        let mut first_seen: HashMap<String, String> = HashMap::new();
        let mut results = Vec::with_capacity(files.len());

        for path in &files {
            let display = self.display_path(path);
            let value = match read_json(path) {
                Ok(value) => value,
                Err(error) => {
                    results.push(FileValidationResult::new(display, error_entries(&error), vec![]));
                    continue;
                }
            };

            let checked =
                validate_content_with_warnings(&value, &self.schemas.project, &RECOMMENDED_PROJECT_FIELDS);
            let errors = match checked.result {
                Ok(project) => match first_seen.get(&project.slug) {
                    Some(original) => vec![
                        ValidationError::new(
                            "slug",
                            format!(
                                "Duplicate project slug '{}' (first defined in {original})",
                                project.slug
                            ),
                            ErrorKind::DuplicateSlug,
                        )
                        .with_value(project.slug.as_str()),
                    ],
                    None => {
                        first_seen.insert(project.slug, display.clone());
                        Vec::new()
                    }
                },
                Err(errors) => errors,
            };
            results.push(FileValidationResult::new(display, errors, checked.warnings));
        }

        (results, first_seen.into_keys().collect())
    }

    fn check_case_studies(&self, project_slugs: &BTreeSet<String>) -> Vec<FileValidationResult> {
        let files = match self.list_records(ContentKind::CaseStudies) {
            Ok(files) => files,
            Err(error) => {
                let dir = self.path_for(ContentKind::CaseStudies);
                return vec![FileValidationResult::new(
                    self.display_path(&dir),
                    error_entries(&error),
                    vec![],
                )];
            }
        };

        files
            .iter()
            .map(|path| self.check_case_study(path, project_slugs))
            .collect()
    }

    fn check_case_study(&self, path: &Path, project_slugs: &BTreeSet<String>) -> FileValidationResult {
        let display = self.display_path(path);
        match self.read_case_study(path) {
            Ok(document) => {
                let project = &document.frontmatter.project;
                let warnings = if project_slugs.contains(project) {
                    Vec::new()
                } else {
                    vec![
                        ValidationError::new(
                            "project",
                            format!("Project '{project}' not found"),
                            ErrorKind::UnresolvedReference,
                        )
                        .with_value(project.as_str()),
                    ]
                };
                FileValidationResult::new(display, Vec::new(), warnings)
            }
            Err(error) => FileValidationResult::new(display, error_entries(&error), Vec::new()),
        }
    }
}

/// Express a load failure as report entries.
fn error_entries(error: &ContentError) -> Vec<ValidationError> {
    match error {
        ContentError::Validation { errors, .. } => errors.clone(),
        ContentError::Io { source, .. } => {
            vec![ValidationError::root(source.to_string(), ErrorKind::IoError)]
        }
        ContentError::Json { source, .. } => {
            vec![ValidationError::root(source.to_string(), ErrorKind::InvalidJson)]
        }
        ContentError::FrontMatter { reason, .. } => {
            vec![ValidationError::root(reason.clone(), ErrorKind::InvalidFrontMatter)]
        }
        other => vec![ValidationError::root(other.to_string(), ErrorKind::Custom)],
    }
}
