//! OpenSky API gateway.
//!
//! The single place where network failures become [`FetchError`] values.
//! No retries happen here; a failed call is reported once and the caller
//! decides what to do next.

use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::TokenManager;
use crate::error::{FetchError, FetchResult};
use crate::provider::{AsyncHttpClient, QueryParams};

/// Default OpenSky REST API root.
pub const DEFAULT_API_URL: &str = "https://opensky-network.org/api";

/// Path of the bounding-box filtered state vector query.
pub const STATES_ALL_PATH: &str = "/states/all";

/// Issues authenticated (when possible) GET requests against the provider.
pub struct Gateway<C: AsyncHttpClient> {
    http: C,
    tokens: TokenManager<C>,
    base_url: String,
}

impl<C: AsyncHttpClient> Gateway<C> {
    pub fn new(http: C, tokens: TokenManager<C>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            tokens,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenManager<C> {
        &self.tokens
    }

    /// GETs `path` with `params` and decodes the JSON body.
    ///
    /// Sends `Accept: application/json` always and a bearer token when the
    /// token manager has one. Transport failures, non-2xx statuses and
    /// undecodable bodies all come back as `Err(FetchError)` tagged with the
    /// URL and parameters used.
    pub async fn fetch(&self, path: &str, params: &QueryParams) -> FetchResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        let bearer = self.tokens.get_token().await.map(|t| format!("Bearer {}", t));
        let mut headers: Vec<(&str, &str)> = vec![("Accept", "application/json")];
        if let Some(value) = bearer.as_deref() {
            headers.push(("Authorization", value));
        }

        debug!(
            url = %url,
            authenticated = bearer.is_some(),
            params = params.len(),
            "Fetching from OpenSky"
        );

        let response = self
            .http
            .get(&url, params.as_pairs(), &headers)
            .await
            .map_err(|e| FetchError::from_transport(e, &url, params))?;

        if !response.is_success() {
            warn!(url = %url, status = response.status, "OpenSky returned error status");
            return Err(FetchError::http_status(response.status, &url, params));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            warn!(url = %url, error = %e, "OpenSky returned undecodable body");
            FetchError::unknown(format!("Invalid JSON in response: {}", e), &url, params)
        })
    }
}
