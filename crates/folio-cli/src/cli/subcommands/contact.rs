use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum ContactCommands {
    /// Run a JSON form body through the contact handler; mail is logged, not sent.
    Submit(SubmitArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// JSON file holding the form body (`-` for stdin).
    pub file: PathBuf,
    /// `X-Forwarded-For` header value.
    #[arg(long)]
    pub forwarded_for: Option<String>,
    /// `User-Agent` header value.
    #[arg(long)]
    pub user_agent: Option<String>,
}
