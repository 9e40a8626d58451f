//! Site command handlers.

use dialoguer::Input;

use ax_config::{Settings, TokenStore};

use crate::cli::{GlobalOpts, SiteCommand};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    command: SiteCommand,
    settings: &Settings,
    store: &TokenStore,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        SiteCommand::List { domain } => {
            let client = util::authenticated_client(settings, store)?;
            let sites = match domain {
                Some(domain) => client.get_site(&domain).await?,
                None => client.list_sites().await?,
            };
            output::print_sites(&sites, global.quiet);
            Ok(())
        }

        SiteCommand::Create { domain } => {
            let domain = match domain {
                Some(domain) => domain,
                None => Input::new()
                    .with_prompt("Enter the domain name")
                    .interact_text()?,
            };

            let client = util::authenticated_client(settings, store)?;
            let response = client.create_site(&domain).await?;
            output::print_json(&response, global.quiet);
            Ok(())
        }
    }
}
