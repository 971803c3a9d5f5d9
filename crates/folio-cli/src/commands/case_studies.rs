use folio_core::enums::ContentKind;
use folio_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CaseStudiesArgs;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio case-studies`.
pub fn list(args: &CaseStudiesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut studies = match args.project.as_deref() {
        Some(project) => ctx.loader.get_case_studies_for_project(project),
        None if args.featured => ctx.loader.get_featured_case_studies(),
        None => ctx.loader.get_all_case_studies(),
    };
    if args.featured && args.project.is_some() {
        studies.retain(|study| study.frontmatter.featured);
    }

    let limit = effective_limit(flags.limit, ctx.default_limit());
    output(&take_limited(studies, limit), flags.format)
}

/// Handle `folio case-study <slug>`.
pub fn get(slug: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let study = ctx
        .loader
        .get_case_study_by_slug(slug)
        .ok_or_else(|| CoreError::NotFound {
            kind: ContentKind::CaseStudies.to_string(),
            id: slug.to_string(),
        })?;
    output(&study, flags.format)
}
