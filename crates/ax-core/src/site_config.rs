//! Per-site configuration documents.
//!
//! A document is authored locally as YAML, edited by the user, and later
//! pushed to the settings endpoint re-serialized as JSON. Rule entries in
//! the sequence fields are opaque to the client and pass through untouched.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::validate::strip_scheme;

/// Routing/security/caching settings for one site.
///
/// `target` must be a bare host (scheme stripped); everything else mirrors
/// what the control plane accepts on its settings endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub https_redirect: bool,
    pub target: String,
    pub hsts_enabled: bool,
    pub url_normalization: bool,
    pub ssl: String,
    pub av_scan: Vec<Value>,
    pub upload_limit: Vec<Value>,
    pub rate_limit: Vec<Value>,
    pub transformation: Transformation,
    pub rewrite: Vec<Value>,
    pub waf: Vec<Value>,
    pub yara: Vec<Value>,
}

/// Header rewrite rules applied at the edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub request_headers: Vec<Value>,
    pub response_headers: Vec<Value>,
}

impl Default for SiteConfig {
    /// The fixed scaffold template: everything off, SSL in flexible mode,
    /// no rules, and a placeholder target.
    fn default() -> Self {
        Self {
            https_redirect: false,
            target: "placeholder".into(),
            hsts_enabled: false,
            url_normalization: false,
            ssl: "flexible".into(),
            av_scan: Vec::new(),
            upload_limit: Vec::new(),
            rate_limit: Vec::new(),
            transformation: Transformation::default(),
            rewrite: Vec::new(),
            waf: Vec::new(),
            yara: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Template with `target` set to `target`, minus any scheme prefix.
    ///
    /// No validation happens here; callers are expected to have run the
    /// target through [`crate::validate::validate_target`] first.
    pub fn for_target(target: &str) -> Self {
        Self {
            target: strip_scheme(target).to_owned(),
            ..Self::default()
        }
    }

    /// Serialize to the on-disk text format.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Parse from the on-disk text format.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
