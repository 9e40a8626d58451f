//! Guided onboarding: token login, then scaffold a site configuration.
//!
//! Prompt gathering is kept apart from the file-writing step so the
//! scaffold logic is testable with canned answers and a temp directory.

use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Input};

use ax_config::{Settings, TokenStore};
use ax_core::{SiteConfig, validate_domain, validate_target};

use crate::cli::GlobalOpts;
use crate::error::CliError;

use super::auth;

/// Directory (relative to the working directory) holding generated site
/// configuration files.
const CONFIGS_DIR: &str = "configs";

/// Completed answers from the onboarding prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SiteAnswers {
    domain: String,
    target: String,
}

pub async fn handle(
    settings: &Settings,
    store: &TokenStore,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Users without a token are sent to the signup page instead.
    let has_token = Confirm::new()
        .with_prompt("Do you have a login token?")
        .default(false)
        .interact()?;
    if !has_token {
        auth::register(settings, global)?;
        return Ok(());
    }

    // Token prompt, verification probe, persist.
    auth::prompt_and_store_token(settings, store, global).await?;

    // Domain and target, re-asked until they validate.
    let answers = gather_site_answers()?;

    let written = write_site_config(Path::new(CONFIGS_DIR), &answers, || {
        Ok(Confirm::new()
            .with_prompt(format!(
                "Config file for {} already exists. Overwrite?",
                answers.domain
            ))
            .default(false)
            .interact()?)
    })?;

    let Some(path) = written else {
        // Declined overwrite: nothing written, successful exit.
        if !global.quiet {
            eprintln!("Operation cancelled");
        }
        return Ok(());
    };

    if !global.quiet {
        eprintln!("ax site create -d {}", answers.domain);
        eprintln!("ax settings -d {} -c {}", answers.domain, path.display());
    }
    Ok(())
}

/// Prompt for the site's domain and backend target.
fn gather_site_answers() -> Result<SiteAnswers, CliError> {
    let domain: String = Input::new()
        .with_prompt("Enter your domain name")
        .validate_with(|input: &String| validate_domain(input).map_err(|e| e.to_string()))
        .interact_text()?;

    let target: String = Input::new()
        .with_prompt("Enter your target domain name or IP address")
        .validate_with(|input: &String| validate_target(input).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(SiteAnswers { domain, target })
}

/// Write the default configuration for `answers` under `configs_dir`.
///
/// Creates the directory when absent ("already exists" is not an error).
/// When the destination file exists, `confirm_overwrite` decides; a
/// declined overwrite returns `Ok(None)` and leaves the file untouched.
fn write_site_config(
    configs_dir: &Path,
    answers: &SiteAnswers,
    confirm_overwrite: impl FnOnce() -> Result<bool, CliError>,
) -> Result<Option<PathBuf>, CliError> {
    std::fs::create_dir_all(configs_dir)?;

    let path = configs_dir.join(format!("{}.yaml", answers.domain));
    if path.exists() && !confirm_overwrite()? {
        return Ok(None);
    }

    let document = SiteConfig::for_target(&answers.target);
    let rendered = document.to_yaml().map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(&path, rendered)?;
    Ok(Some(path))
}
