use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a content command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Validate => commands::validate::run(ctx, flags),
        Commands::Profile => commands::content::profile(ctx, flags),
        Commands::Skills => commands::content::skills(ctx, flags),
        Commands::Projects => commands::content::projects(ctx, flags),
        Commands::Project(args) => commands::content::project(&args.slug, ctx, flags),
        Commands::Experience => commands::content::experience(ctx, flags),
        Commands::Certifications => commands::content::certifications(ctx, flags),
        Commands::CaseStudies(args) => commands::case_studies::list(args, ctx, flags),
        Commands::CaseStudy(args) => commands::case_studies::get(&args.slug, ctx, flags),
        Commands::Schema(_) | Commands::Check { .. } | Commands::Contact { .. } => {
            unreachable!("schema/check/contact are pre-dispatched in main")
        }
    }
}
