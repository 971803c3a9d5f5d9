use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{CheckCommands, ContactCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate every content file and print a report.
    Validate,
    /// Show the profile.
    Profile,
    /// List skill groups.
    Skills,
    /// List projects, featured first.
    Projects,
    /// Show one project.
    Project(ProjectArgs),
    /// List work experience, current roles first.
    Experience,
    /// List certifications, newest first.
    Certifications,
    /// List case studies.
    CaseStudies(CaseStudiesArgs),
    /// Show one case study.
    CaseStudy(CaseStudyArgs),
    /// List schemas or print one.
    Schema(SchemaArgs),
    /// Check a single value.
    Check {
        #[command(subcommand)]
        action: CheckCommands,
    },
    /// Exercise the contact form handler locally.
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProjectArgs {
    /// Project slug.
    pub slug: String,
}

#[derive(Clone, Debug, Args)]
pub struct CaseStudiesArgs {
    /// Only case studies marked featured.
    #[arg(long)]
    pub featured: bool,
    /// Only case studies about this project.
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CaseStudyArgs {
    /// Case study slug (file name without `.mdx`).
    pub slug: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `project` or `contact_form`.
    pub name: Option<String>,
    /// Validate this JSON file against the schema instead of printing it.
    #[arg(long, requires = "name")]
    pub check: Option<PathBuf>,
}
