//! Reads, decodes, validates, and orders content from a content root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_config::ContentConfig;
use folio_core::entities::{
    CaseStudy, CaseStudyFrontmatter, Certification, Experience, ProfileData, Project, SkillGroup,
};
use folio_core::enums::ContentKind;
use folio_schema::{ContentRules, Schema, SchemaError, validate_project_slug, validate_with_details};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::case_studies::CaseStudyDocument;
use crate::error::ContentError;
use crate::ordering;

/// Compiled schemas for every content source, built once per loader.
#[derive(Debug)]
pub(crate) struct Schemas {
    pub(crate) profile: Schema<ProfileData>,
    pub(crate) skills: Schema<Vec<SkillGroup>>,
    pub(crate) project: Schema<Project>,
    pub(crate) experience: Schema<Vec<Experience>>,
    pub(crate) certifications: Schema<Vec<Certification>>,
    pub(crate) case_study: Schema<CaseStudyFrontmatter>,
}

impl Schemas {
    fn compile() -> Result<Self, SchemaError> {
        Ok(Self {
            profile: Schema::compile()?,
            skills: Schema::compile()?,
            project: Schema::compile()?,
            experience: Schema::compile()?,
            certifications: Schema::compile()?,
            case_study: Schema::compile()?,
        })
    }
}

/// Loads typed content from one content root.
///
/// Every call reads the files again; nothing is cached.
#[derive(Debug)]
pub struct ContentLoader {
    pub(crate) config: ContentConfig,
    pub(crate) schemas: Schemas,
}

impl ContentLoader {
    /// Loader for `root` with the default skip policy.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Schema` if a content schema fails to compile.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ContentError> {
        Self::from_config(&ContentConfig {
            root: root.into(),
            ..ContentConfig::default()
        })
    }

    /// Loader using the root and skip policy from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Schema` if a content schema fails to compile.
    pub fn from_config(config: &ContentConfig) -> Result<Self, ContentError> {
        Ok(Self {
            config: config.clone(),
            schemas: Schemas::compile()?,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// File or directory backing `kind`.
    #[must_use]
    pub fn path_for(&self, kind: ContentKind) -> PathBuf {
        self.config.root.join(kind.layout().relative_path())
    }

    /// `path` relative to the content root, for messages and reports.
    pub(crate) fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.config.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    // -----------------------------------------------------------------------
    // Single-file sources
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// Fails when `profile.json` is missing, is not JSON, or is invalid.
    pub fn load_profile(&self) -> Result<ProfileData, ContentError> {
        self.load_document(ContentKind::Profile, &self.schemas.profile)
    }

    /// Skill groups in display order.
    ///
    /// # Errors
    ///
    /// Fails when `skills.json` is missing, is not JSON, or is invalid.
    pub fn load_skills(&self) -> Result<Vec<SkillGroup>, ContentError> {
        let mut groups = self.load_document(ContentKind::Skills, &self.schemas.skills)?;
        ordering::sort_skill_groups(&mut groups);
        Ok(groups)
    }

    /// Positions, newest first.
    ///
    /// # Errors
    ///
    /// Fails when `experience.json` is missing, is not JSON, or is invalid.
    pub fn load_experience(&self) -> Result<Vec<Experience>, ContentError> {
        let mut experience =
            self.load_document(ContentKind::Experience, &self.schemas.experience)?;
        ordering::sort_experience(&mut experience);
        Ok(experience)
    }

    /// Certifications, newest first.
    ///
    /// # Errors
    ///
    /// Fails when `certifications.json` is missing, is not JSON, or is invalid.
    pub fn load_certifications(&self) -> Result<Vec<Certification>, ContentError> {
        let mut certifications =
            self.load_document(ContentKind::Certifications, &self.schemas.certifications)?;
        ordering::sort_certifications(&mut certifications);
        Ok(certifications)
    }

    fn load_document<T>(&self, kind: ContentKind, schema: &Schema<T>) -> Result<T, ContentError>
    where
        T: DeserializeOwned + ContentRules,
    {
        let path = self.path_for(kind);
        let result = decode_json(&path, schema);
        if let Err(error) = &result {
            tracing::error!(kind = %kind, file = %path.display(), %error, "failed to load content");
        }
        result
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// Every valid project, featured first then newest.
    ///
    /// A file that fails to decode or validate is logged and skipped, as is
    /// a file repeating an earlier file's slug. A missing `projects/`
    /// directory is an empty collection.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be listed, or when the skipped files
    /// break the configured skip policy.
    pub fn load_projects(&self) -> Result<Vec<Project>, ContentError> {
        let files = self.list_records(ContentKind::Projects)?;
        let mut projects: Vec<Project> = Vec::with_capacity(files.len());
        let mut skipped = 0usize;

        for path in &files {
            match decode_json(path, &self.schemas.project) {
                Ok(project) if projects.iter().any(|p| p.slug == project.slug) => {
                    tracing::warn!(
                        file = %path.display(),
                        slug = %project.slug,
                        "duplicate project slug; skipping"
                    );
                    skipped += 1;
                }
                Ok(project) => projects.push(project),
                Err(error) => {
                    tracing::warn!(file = %path.display(), %error, "invalid project; skipping");
                    skipped += 1;
                }
            }
        }

        self.check_skip_policy(ContentKind::Projects, skipped, files.len())?;
        ordering::sort_projects(&mut projects);
        Ok(projects)
    }

    /// The project whose slug is `slug`, if any.
    ///
    /// A malformed slug is never looked up and yields `None`.
    ///
    /// # Errors
    ///
    /// Propagates failures of [`Self::load_projects`].
    pub fn load_project(&self, slug: &str) -> Result<Option<Project>, ContentError> {
        if validate_project_slug(slug).is_err() {
            tracing::debug!(slug, "rejecting malformed project slug");
            return Ok(None);
        }
        Ok(self
            .load_projects()?
            .into_iter()
            .find(|project| project.slug == slug))
    }

    fn check_skip_policy(
        &self,
        kind: ContentKind,
        skipped: usize,
        total: usize,
    ) -> Result<(), ContentError> {
        if self.config.tolerates(skipped, total) {
            return Ok(());
        }
        let collection = kind.to_string();
        match self.config.max_skipped {
            Some(limit) if skipped > limit => Err(ContentError::TooManySkipped {
                collection,
                skipped,
                limit,
            }),
            _ => Err(ContentError::NoValidItems {
                collection,
                skipped,
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Case studies
    // -----------------------------------------------------------------------

    /// Slugs of every case study file, sorted.
    #[must_use]
    pub fn get_all_case_study_slugs(&self) -> Vec<String> {
        match self.list_records(ContentKind::CaseStudies) {
            Ok(files) => files
                .iter()
                .filter_map(|path| path.file_stem())
                .map(|stem| stem.to_string_lossy().into_owned())
                .collect(),
            Err(error) => {
                tracing::error!(%error, "failed to list case studies");
                Vec::new()
            }
        }
    }

    /// The case study stored as `<slug>.mdx`, with its project resolved.
    ///
    /// Returns `None` for a malformed slug, a missing file, or a document
    /// whose front matter is incomplete or invalid.
    #[must_use]
    pub fn get_case_study_by_slug(&self, slug: &str) -> Option<CaseStudy> {
        if validate_project_slug(slug).is_err() {
            tracing::debug!(slug, "rejecting malformed case study slug");
            return None;
        }
        let path = self.case_study_path(slug);
        if !path.is_file() {
            return None;
        }

        let document = self.case_study_document(slug)?;
        let project = self.load_project_safe(&document.frontmatter.project);
        Some(document.into_case_study(project))
    }

    /// Every loadable case study, newest first.
    #[must_use]
    pub fn get_all_case_studies(&self) -> Vec<CaseStudy> {
        let projects = self.load_projects_safe().unwrap_or_default();
        let mut case_studies: Vec<CaseStudy> = self
            .get_all_case_study_slugs()
            .iter()
            .filter_map(|slug| self.case_study_document(slug))
            .map(|document| {
                let project = projects
                    .iter()
                    .find(|p| p.slug == document.frontmatter.project)
                    .cloned();
                document.into_case_study(project)
            })
            .collect();

        ordering::sort_case_studies(&mut case_studies);
        case_studies
    }

    #[must_use]
    pub fn get_featured_case_studies(&self) -> Vec<CaseStudy> {
        self.get_all_case_studies()
            .into_iter()
            .filter(|cs| cs.frontmatter.featured)
            .collect()
    }

    /// Case studies whose front matter names `project_slug`.
    #[must_use]
    pub fn get_case_studies_for_project(&self, project_slug: &str) -> Vec<CaseStudy> {
        self.get_all_case_studies()
            .into_iter()
            .filter(|cs| cs.frontmatter.project == project_slug)
            .collect()
    }

    pub(crate) fn case_study_path(&self, slug: &str) -> PathBuf {
        let layout = ContentKind::CaseStudies.layout();
        self.path_for(ContentKind::CaseStudies)
            .join(format!("{slug}.{}", layout.extension()))
    }

    fn case_study_document(&self, slug: &str) -> Option<CaseStudyDocument> {
        let path = self.case_study_path(slug);
        match self.read_case_study(&path) {
            Ok(document) => Some(document),
            Err(error) => {
                tracing::error!(slug, file = %path.display(), %error, "failed to load case study");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Safe variants
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn load_profile_safe(&self) -> Option<ProfileData> {
        safe("profile", self.load_profile())
    }

    #[must_use]
    pub fn load_skills_safe(&self) -> Option<Vec<SkillGroup>> {
        safe("skills", self.load_skills())
    }

    #[must_use]
    pub fn load_experience_safe(&self) -> Option<Vec<Experience>> {
        safe("experience", self.load_experience())
    }

    #[must_use]
    pub fn load_certifications_safe(&self) -> Option<Vec<Certification>> {
        safe("certifications", self.load_certifications())
    }

    #[must_use]
    pub fn load_projects_safe(&self) -> Option<Vec<Project>> {
        safe("projects", self.load_projects())
    }

    #[must_use]
    pub fn load_project_safe(&self, slug: &str) -> Option<Project> {
        safe("project", self.load_project(slug)).flatten()
    }

    // -----------------------------------------------------------------------
    // File access
    // -----------------------------------------------------------------------

    /// Record files of a directory source, sorted by file name.
    pub(crate) fn list_records(&self, kind: ContentKind) -> Result<Vec<PathBuf>, ContentError> {
        let layout = kind.layout();
        let dir = self.path_for(kind);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(ContentError::Io { path: dir, source }),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| ContentError::Io {
                    path: dir.clone(),
                    source,
                })?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == layout.extension()) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

pub(crate) fn read_json(path: &Path) -> Result<Value, ContentError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_json<T>(path: &Path, schema: &Schema<T>) -> Result<T, ContentError>
where
    T: DeserializeOwned + ContentRules,
{
    let value = read_json(path)?;
    validate_with_details(&value, schema).map_err(|errors| ContentError::Validation {
        path: path.to_path_buf(),
        errors,
    })
}

pub(crate) fn read_text(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn safe<T>(what: &str, result: Result<T, ContentError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!(%error, "failed to load {what}");
            None
        }
    }
}
