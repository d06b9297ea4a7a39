//! Client-credentials token acquisition.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::cache::{CachedToken, Clock, TokenCache};
use crate::provider::{AsyncHttpClient, TransportError};

/// Lifetime assumed when the token endpoint omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 1800;

/// Subtracted from `expires_in` to absorb clock skew and in-flight requests.
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 30;

/// Floor on the cached lifetime so short-lived tokens do not cause refresh storms.
pub const MIN_TOKEN_LIFETIME_SECS: i64 = 60;

/// How long a freshly issued token is cached: `max(60, expires_in - 30)` seconds.
pub fn token_lifetime(expires_in_secs: i64) -> Duration {
    let secs = expires_in_secs
        .saturating_sub(TOKEN_EXPIRY_MARGIN_SECS)
        .max(MIN_TOKEN_LIFETIME_SECS);
    Duration::from_secs(secs as u64)
}

/// OAuth2 client credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Builds credentials only when both parts are present and non-blank.
    pub fn from_parts(client_id: Option<String>, client_secret: Option<String>) -> Option<Self> {
        let id = client_id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())?;
        let secret = client_secret
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())?;
        Some(Self::new(id, secret))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<f64>,
}

#[derive(Debug, Error)]
enum RefreshError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("token endpoint returned HTTP {0}")]
    Status(u16),

    #[error("malformed token response: {0}")]
    Malformed(String),
}

/// Acquires and caches OAuth2 bearer tokens.
///
/// Never fails: without credentials, or when a refresh fails, [`get_token`]
/// returns `None` and the caller proceeds anonymously.
///
/// [`get_token`]: TokenManager::get_token
pub struct TokenManager<C: AsyncHttpClient> {
    http: C,
    credentials: Option<ClientCredentials>,
    token_url: String,
    cache: Arc<TokenCache>,
    clock: Arc<dyn Clock>,
}

impl<C: AsyncHttpClient> TokenManager<C> {
    pub fn new(
        http: C,
        credentials: Option<ClientCredentials>,
        token_url: impl Into<String>,
        cache: Arc<TokenCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            http,
            credentials,
            token_url: token_url.into(),
            cache,
            clock,
        }
    }

    /// Token manager that never authenticates.
    pub fn anonymous(http: C, clock: Arc<dyn Clock>) -> Self {
        Self::new(http, None, String::new(), Arc::new(TokenCache::new()), clock)
    }

    /// True when client credentials were supplied.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn cache(&self) -> &Arc<TokenCache> {
        &self.cache
    }

    /// Returns a usable bearer token, or `None` for anonymous access.
    ///
    /// A cached token is returned without any network call while it is valid.
    /// Otherwise one client-credentials grant is attempted; on failure the
    /// cache is left untouched and `None` is returned, so the next call retries.
    pub async fn get_token(&self) -> Option<String> {
        let credentials = self.credentials.as_ref()?;

        let now = self.clock.now();
        if let Some(token) = self.cache.valid_token(now) {
            return Some(token);
        }

        match self.refresh(credentials, now).await {
            Ok(token) => Some(token),
            Err(e) => {
                warn!(
                    token_url = %self.token_url,
                    error = %e,
                    "Token refresh failed, continuing anonymously"
                );
                None
            }
        }
    }

    async fn refresh(
        &self,
        credentials: &ClientCredentials,
        now: Instant,
    ) -> Result<String, RefreshError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];

        let response = self.http.post_form(&self.token_url, &form).await?;
        if !response.is_success() {
            return Err(RefreshError::Status(response.status));
        }

        let payload: TokenResponse = serde_json::from_slice(&response.body)
            .map_err(|e| RefreshError::Malformed(e.to_string()))?;

        let value = payload
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RefreshError::Malformed("missing access_token".to_string()))?;

        let expires_in = payload
            .expires_in
            .map(|secs| secs as i64)
            .unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        let lifetime = token_lifetime(expires_in);

        debug!(
            client_id = %credentials.client_id,
            expires_in = expires_in,
            cached_secs = lifetime.as_secs(),
            "Obtained OpenSky access token"
        );

        self.cache.replace(CachedToken::new(value.clone(), now + lifetime));
        Ok(value)
    }
}
