use clap::Subcommand;

/// Single-value checks.
#[derive(Clone, Debug, Subcommand)]
pub enum CheckCommands {
    /// Project slug: lowercase letters, digits, single hyphens.
    Slug { value: String },
    /// Absolute URL.
    Url {
        value: String,
        /// Field name to report errors under.
        #[arg(long, default_value = "url")]
        field: String,
    },
    /// Email address.
    Email { value: String },
    /// Content date (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or RFC 3339).
    Date {
        value: String,
        /// Field name to report errors under.
        #[arg(long, default_value = "date")]
        field: String,
    },
}
