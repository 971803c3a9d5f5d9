use folio_schema::{validate_date, validate_email, validate_project_slug, validate_url};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CheckCommands;
use crate::commands::shared::outcome::{CheckOutcome, report};

/// Handle `folio check`.
pub fn handle(action: &CheckCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = match action {
        CheckCommands::Slug { value } => validate_project_slug(value),
        CheckCommands::Url { value, field } => validate_url(value, field),
        CheckCommands::Email { value } => validate_email(value),
        CheckCommands::Date { value, field } => validate_date(value, field),
    };
    report(&CheckOutcome::from(result), flags.format)
}
