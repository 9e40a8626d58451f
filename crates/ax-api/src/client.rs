// Hand-crafted async HTTP client for the Arxignis control-plane API.
//
// Base path: /v1/
// Auth: `Authorization: Bearer <token>` on every request.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::types::{PurgeRequest, Site};

/// Fixed user agent carried on every request.
pub const CLIENT_USER_AGENT: &str = concat!("Arxignis CLI ", env!("CARGO_PKG_VERSION"));

/// Async client for the control-plane REST API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build from the API base URL and a bearer token.
    ///
    /// Injects `Authorization` (marked sensitive) and `User-Agent` as
    /// default headers. No request timeout is configured; a command waits
    /// as long as the server does.
    pub fn new(base_url: &Url, token: &SecretString) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("token is not a valid header value: {e}"),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
        })
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"v1/sites"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// GET and DELETE never carry a body; this is the only bodyless path.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        handle_response(resp).await
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// List all sites. `GET /v1/sites`
    pub async fn list_sites(&self) -> Result<Vec<Site>, Error> {
        self.get("v1/sites").await
    }

    /// Fetch one site by domain. `GET /v1/sites/{domain}`
    ///
    /// The endpoint returns a bare object; it is wrapped into a
    /// one-element list so callers render it like a listing.
    pub async fn get_site(&self, domain: &str) -> Result<Vec<Site>, Error> {
        let value: serde_json::Value = self.get(&format!("v1/sites/{domain}")).await?;
        match value {
            serde_json::Value::Array(_) => {
                serde_json::from_value(value).map_err(|e| Error::UnexpectedResponse {
                    message: format!("expected an array of sites: {e}"),
                })
            }
            serde_json::Value::Object(_) => {
                let site = serde_json::from_value(value).map_err(|e| Error::UnexpectedResponse {
                    message: format!("expected a site object: {e}"),
                })?;
                Ok(vec![site])
            }
            _ => Err(Error::UnexpectedResponse {
                message: "expected an array or object".into(),
            }),
        }
    }

    /// Register a new site. `POST /v1/sites/{domain}` with `{"domain": ...}`
    pub async fn create_site(&self, domain: &str) -> Result<serde_json::Value, Error> {
        self.post(
            &format!("v1/sites/{domain}"),
            &serde_json::json!({ "domain": domain }),
        )
        .await
    }

    /// Purge cached content. `POST /v1/sites/{domain}/purge`
    pub async fn purge(
        &self,
        domain: &str,
        request: &PurgeRequest,
    ) -> Result<serde_json::Value, Error> {
        self.post(&format!("v1/sites/{domain}/purge"), request).await
    }

    /// Replace a site's settings document. `POST /v1/site/settings/{domain}`
    ///
    /// The document is whatever the local config file parsed to; the
    /// client forwards it verbatim as JSON.
    pub async fn push_settings(
        &self,
        domain: &str,
        document: &serde_json::Value,
    ) -> Result<serde_json::Value, Error> {
        self.post(&format!("v1/site/settings/{domain}"), document)
            .await
    }

    /// Login test: list sites and discard the body. Succeeds iff the
    /// token is accepted.
    pub async fn probe(&self) -> Result<(), Error> {
        let _: serde_json::Value = self.get("v1/sites").await?;
        Ok(())
    }
}

/// Ensure the base path ends with `/` so relative joins append instead of
/// replacing the last segment.
fn normalize_base_url(raw: &Url) -> Url {
    let mut url = raw.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Map a response to its decoded body, or to [`Error::Api`] on non-2xx.
///
/// The error payload is parsed as JSON when possible; otherwise the raw
/// text is carried so callers still print the body verbatim.
async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let payload = serde_json::from_str(&body)
            .unwrap_or_else(|_| serde_json::Value::String(body));
        return Err(Error::Api {
            status: status.as_u16(),
            payload,
        });
    }

    Ok(resp.json().await?)
}
