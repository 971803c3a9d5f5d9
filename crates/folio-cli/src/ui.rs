use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrowest `COLUMNS` value the table renderer will fit to.
const MIN_TABLE_WIDTH: usize = 40;

/// Terminal preferences for table output, fixed at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    fn detect(flags: &GlobalFlags, stdout_is_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        Self {
            table_color: stdout_is_tty
                && !no_color
                && !flags.quiet
                && flags.format == OutputFormat::Table,
            term_width: columns
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|width| *width >= MIN_TABLE_WIDTH),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::detect(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

/// Preferences set by [`init`], or plain output if it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
