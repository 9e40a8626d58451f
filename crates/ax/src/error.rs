//! CLI error types with miette diagnostics.
//!
//! Leaf modules return typed errors; `main` is the only place that maps
//! them to exit codes and terminates the process.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes reported to the shell. Success is the implicit 0.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("No token found")]
    #[diagnostic(
        code(ax::no_token),
        help("Log in first: ax login (or run ax init for guided setup)")
    )]
    TokenMissing,

    // ── API ──────────────────────────────────────────────────────────

    /// Non-2xx response; the payload is printed verbatim.
    #[error("API Error: {payload}")]
    #[diagnostic(code(ax::api_error))]
    Api {
        status: u16,
        payload: serde_json::Value,
    },

    #[error("Could not reach the API at {url}")]
    #[diagnostic(
        code(ax::connection_failed),
        help("Check the network and the --api-url value.")
    )]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(ax::api))]
    Client(ax_api::Error),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ax::validation))]
    Validation { field: String, reason: String },

    // ── Local configuration files ────────────────────────────────────

    #[error("Config file not found: {path}")]
    #[diagnostic(code(ax::config_not_found))]
    ConfigFileNotFound { path: PathBuf },

    #[error("Invalid config path: {path}")]
    #[diagnostic(
        code(ax::config_bad_path),
        help("The path must point at a regular file.")
    )]
    ConfigFileBadPath { path: PathBuf },

    #[error("Error reading config file {path}")]
    #[diagnostic(code(ax::config_read))]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {path} is not valid YAML")]
    #[diagnostic(code(ax::config_parse))]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // ── Settings / token store ───────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(ax::settings))]
    Settings(#[from] ax_config::ConfigError),

    #[error(transparent)]
    #[diagnostic(code(ax::store))]
    Store(ax_config::StoreError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Prompt failed: {0}")]
    #[diagnostic(code(ax::prompt))]
    Prompt(#[from] dialoguer::Error),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TokenMissing | Self::Api { status: 401 | 403, .. } => exit_code::AUTH,
            Self::Connection { .. } => exit_code::CONNECTION,
            Self::ConfigFileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error mappings ───────────────────────────────────────────

impl From<ax_api::Error> for CliError {
    fn from(err: ax_api::Error) -> Self {
        match err {
            ax_api::Error::Api { status, payload } => Self::Api { status, payload },
            ax_api::Error::Transport(e) if e.is_connect() => Self::Connection {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                source: e,
            },
            other => Self::Client(other),
        }
    }
}

impl From<ax_config::StoreError> for CliError {
    fn from(err: ax_config::StoreError) -> Self {
        match err {
            ax_config::StoreError::TokenMissing => Self::TokenMissing,
            other => Self::Store(other),
        }
    }
}
