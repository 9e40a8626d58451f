//! Process settings and the on-disk token store.
//!
//! [`Settings`] is resolved once at startup from CLI flags and environment
//! variables, then passed explicitly to every component that needs it.
//! [`TokenStore`] is a single-file key-value store holding the cached
//! login token under the user's home directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Default API base when `CLI_API_URL` / `--api-url` are absent.
pub const DEFAULT_API_URL: &str = "https://api.arxignis.com";

/// Default signup page when `CLI_SIGNUP_URL` / `--signup-url` are absent.
pub const DEFAULT_SIGNUP_URL: &str = "https://dash.arxignis.com/auth/signup";

const STORE_DIR: &str = ".ax";
const STORE_FILE: &str = "cache.db";
const TOKEN_KEY: &str = "token";

// ── Settings ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },
}

/// Resolved process-wide settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the control-plane API.
    pub api_url: Url,
    /// Signup page opened by `register` and the onboarding flow.
    pub signup_url: String,
}

impl Settings {
    /// Apply defaults and parse the API base URL.
    ///
    /// The caller hands in whatever the flag/env layer produced; `None`
    /// falls back to the hosted defaults.
    pub fn resolve(
        api_url: Option<String>,
        signup_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let api_url = raw.parse().map_err(|_| ConfigError::Validation {
            field: "api-url".into(),
            reason: format!("invalid URL: {raw}"),
        })?;

        Ok(Self {
            api_url,
            signup_url: signup_url.unwrap_or_else(|| DEFAULT_SIGNUP_URL.to_owned()),
        })
    }
}

// ── Token store ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    /// No token has been saved yet. Authenticated commands treat this as
    /// fatal before making any network call.
    #[error("No token found")]
    TokenMissing,

    #[error("HOME is not set; cannot locate the token store")]
    NoHome,

    #[error("token store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("token store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Single-file key-value store for the cached login token.
///
/// Lives at `<home>/.ax/cache.db` as a flat JSON string map with one key.
/// Single-invocation use is assumed; two processes racing on the file is
/// an accepted, unhandled case.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store under `$HOME/.ax/cache.db`.
    pub fn open_default() -> Result<Self, StoreError> {
        let home = std::env::var_os("HOME").ok_or(StoreError::NoHome)?;
        Ok(Self::at(Path::new(&home).join(STORE_DIR).join(STORE_FILE)))
    }

    /// Store at an explicit path (tests, alternate roots).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the token, creating the store directory if absent.
    pub fn save(&self, token: &SecretString) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_owned(),
                source,
            })?;
        }

        let mut map = self.read_map()?;
        map.insert(TOKEN_KEY.to_owned(), token.expose_secret().to_owned());

        let body = serde_json::to_string(&map).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, body).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Retrieve the saved token, failing with [`StoreError::TokenMissing`]
    /// when nothing has been saved.
    pub fn load(&self) -> Result<SecretString, StoreError> {
        let mut map = self.read_map()?;
        map.remove(TOKEN_KEY)
            .map(SecretString::from)
            .ok_or(StoreError::TokenMissing)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(body) => serde_json::from_str(&body).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
