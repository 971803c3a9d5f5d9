use folio_core::errors::CoreError;
use folio_schema::format_validation_report;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio validate`. Fails when any content file is invalid.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.loader.validate_all_content();

    match flags.format {
        OutputFormat::Table => println!("{}", format_validation_report(&report)),
        format => output(&report, format)?,
    }

    if report.valid {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "{} of {} content files failed validation",
        report.summary.invalid_files, report.summary.total_files
    ))
    .into())
}
