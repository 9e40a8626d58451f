//! Settings push handler: read a local config file and upload it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ax_config::{Settings, TokenStore};
use ax_core::validate_domain;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    domain: String,
    config: PathBuf,
    settings: &Settings,
    store: &TokenStore,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let document = read_config_document(&config)?;

    validate_domain(&domain).map_err(|e| CliError::Validation {
        field: "domain".into(),
        reason: e.to_string(),
    })?;

    let client = util::authenticated_client(settings, store)?;
    let response = client.push_settings(&domain, &document).await?;
    output::print_json(&response, global.quiet);
    Ok(())
}

/// Read and parse a site configuration file.
///
/// A missing file, a path that cannot name a regular file, and any other
/// read failure each get their own error so the user sees which one hit.
fn read_config_document(path: &Path) -> Result<serde_json::Value, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CliError::ConfigFileNotFound {
            path: path.to_owned(),
        },
        ErrorKind::NotADirectory | ErrorKind::IsADirectory => CliError::ConfigFileBadPath {
            path: path.to_owned(),
        },
        _ => CliError::ConfigFileRead {
            path: path.to_owned(),
            source,
        },
    })?;

    let parsed: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|source| CliError::ConfigFileParse {
            path: path.to_owned(),
            source,
        })?;

    // The settings endpoint takes JSON; re-serialize the parsed document.
    serde_json::to_value(parsed).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("config is not representable as JSON: {e}"),
    })
}
