use std::io::Read;

use anyhow::Context;
use folio_config::ContactConfig;
use folio_contact::{ClientInfo, ContactService, TracingMailer};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ContactCommands, SubmitArgs};
use crate::output::output;

/// Handle `folio contact`.
pub async fn handle(
    action: &ContactCommands,
    config: &ContactConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContactCommands::Submit(args) => submit(args, config, flags).await,
    }
}

async fn submit(args: &SubmitArgs, config: &ContactConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = read_body(args)?;
    let service = ContactService::new(config, Some(TracingMailer))
        .context("failed to initialize contact service")?;
    let client = ClientInfo::new(args.forwarded_for.as_deref(), args.user_agent.as_deref());

    let reply = service.submit(&client, &body).await;
    output(&reply, flags.format)?;

    if reply.is_success() {
        Ok(())
    } else {
        anyhow::bail!("contact submission rejected with status {}", reply.status)
    }
}

fn read_body(args: &SubmitArgs) -> anyhow::Result<String> {
    if args.file.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read form body from stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))
}
