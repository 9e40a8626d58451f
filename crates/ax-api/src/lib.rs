//! Async client for the Arxignis control-plane REST API.
//!
//! One thin wrapper around `reqwest`: bearer-token auth and a fixed
//! user agent on every request, JSON in and out, and non-2xx responses
//! surfaced as [`Error::Api`] carrying the server's error payload.

mod client;
mod error;
mod types;

pub use client::{ApiClient, CLIENT_USER_AGENT};
pub use error::Error;
pub use types::{PurgeRequest, Site};
