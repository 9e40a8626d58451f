//! Shared helpers for command handlers.

use ax_api::ApiClient;
use ax_config::{Settings, TokenStore};

use crate::error::CliError;

/// Load the stored token and build an authenticated client.
///
/// An empty store fails here, before any network traffic; every
/// authenticated command goes through this.
pub fn authenticated_client(
    settings: &Settings,
    store: &TokenStore,
) -> Result<ApiClient, CliError> {
    let token = store.load()?;
    Ok(ApiClient::new(&settings.api_url, &token)?)
}
