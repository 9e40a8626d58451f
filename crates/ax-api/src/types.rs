use serde::{Deserialize, Serialize};

/// A domain under management by the control plane.
///
/// Server-owned: the client creates and reads sites, never mutates fields.
/// Timestamps are carried as opaque strings and rendered unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub domain: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for `POST /v1/sites/{domain}/purge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PurgeRequest {
    /// Invalidate one cached URL.
    Url { url: String },
    /// Invalidate everything cached for the site.
    All,
}
