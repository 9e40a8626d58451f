//! Cache purge handlers.

use ax_api::PurgeRequest;
use ax_config::{Settings, TokenStore};

use crate::cli::{GlobalOpts, PurgeCommand, UrlPurgeCommand};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    command: PurgeCommand,
    settings: &Settings,
    store: &TokenStore,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let PurgeCommand::UrlPurge(args) = command;

    let (domain, request) = match args.command {
        Some(UrlPurgeCommand::All { domain }) => (domain, PurgeRequest::All),
        None => {
            // `subcommand_negates_reqs` means clap enforced both flags on
            // this path; the fallbacks only guard against parser changes.
            let domain = args.domain.ok_or_else(|| missing_flag("domain"))?;
            let url = args.url.ok_or_else(|| missing_flag("url"))?;
            (domain, PurgeRequest::Url { url })
        }
    };

    let client = util::authenticated_client(settings, store)?;
    let response = client.purge(&domain, &request).await?;
    output::print_json(&response, global.quiet);
    Ok(())
}

fn missing_flag(field: &str) -> CliError {
    CliError::Validation {
        field: field.into(),
        reason: "required flag was not provided".into(),
    }
}
