//! Login and registration handlers.

use dialoguer::Password;
use secrecy::SecretString;

use ax_api::ApiClient;
use ax_config::{Settings, TokenStore};
use ax_core::validate_token;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Prompt for a token (hidden input), verify it against the API, and
/// persist it in the store.
///
/// The prompt re-asks until the length check passes; the verification
/// probe failing is fatal to the command.
pub async fn prompt_and_store_token(
    settings: &Settings,
    store: &TokenStore,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let token: String = Password::new()
        .with_prompt("Enter your token")
        .validate_with(|input: &String| validate_token(input).map_err(|e| e.to_string()))
        .interact()?;
    let token = SecretString::from(token);

    let client = ApiClient::new(&settings.api_url, &token)?;
    client.probe().await?;

    store.save(&token)?;
    if !global.quiet {
        eprintln!("Login successful");
    }
    Ok(())
}

/// `ax login`
pub async fn login(
    settings: &Settings,
    store: &TokenStore,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    prompt_and_store_token(settings, store, global).await
}

/// `ax register`: open the account signup page in the default browser.
pub fn register(settings: &Settings, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Opening registration page...");
    }
    open::that(&settings.signup_url)?;
    Ok(())
}
