//! Handlers printing the loaded content collections.

use anyhow::Context;
use folio_core::enums::ContentKind;
use folio_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio profile`.
pub fn profile(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = ctx.loader.load_profile().context("failed to load profile")?;
    output(&profile, flags.format)
}

/// Handle `folio skills`.
pub fn skills(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let skills = ctx.loader.load_skills().context("failed to load skills")?;
    output(&take_limited(skills, limit(ctx, flags)), flags.format)
}

/// Handle `folio projects`.
pub fn projects(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let projects = ctx.loader.load_projects().context("failed to load projects")?;
    output(&take_limited(projects, limit(ctx, flags)), flags.format)
}

/// Handle `folio project <slug>`.
pub fn project(slug: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx
        .loader
        .load_project(slug)
        .with_context(|| format!("failed to load project '{slug}'"))?
        .ok_or_else(|| CoreError::NotFound {
            kind: ContentKind::Projects.to_string(),
            id: slug.to_string(),
        })?;
    output(&project, flags.format)
}

/// Handle `folio experience`.
pub fn experience(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let experience = ctx
        .loader
        .load_experience()
        .context("failed to load experience")?;
    output(&take_limited(experience, limit(ctx, flags)), flags.format)
}

/// Handle `folio certifications`.
pub fn certifications(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let certifications = ctx
        .loader
        .load_certifications()
        .context("failed to load certifications")?;
    output(&take_limited(certifications, limit(ctx, flags)), flags.format)
}

fn limit(ctx: &AppContext, flags: &GlobalFlags) -> usize {
    effective_limit(flags.limit, ctx.default_limit())
}
