//! Settings struct, defaults and environment overrides.

use std::path::Path;
use std::time::Duration;

use super::file::{config_file_path, ConfigError};
use crate::auth::ClientCredentials;
use crate::gateway::DEFAULT_API_URL;
use crate::summary::DEFAULT_TOP_N;

/// OpenSky's Keycloak token endpoint.
pub const DEFAULT_TOKEN_URL: &str =
    "https://auth.opensky-network.org/auth/realms/opensky-network/protocol/openid-connect/token";

/// Applies to the token request and the data request alike.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub const ENV_CLIENT_ID: &str = "OPENSKY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "OPENSKY_CLIENT_SECRET";
pub const ENV_TIMEOUT_SECS: &str = "OPENSKY_TIMEOUT_SECS";

/// Everything needed to wire the tools.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    pub token_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub timeout: Duration,
    pub default_top_n: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client_id: None,
            client_secret: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl Settings {
    /// Loads the config file (default location unless `path` is given) and
    /// applies environment overrides from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load_from(&config_file_path())?,
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Credentials, when both id and secret are configured.
    pub fn credentials(&self) -> Option<ClientCredentials> {
        ClientCredentials::from_parts(self.client_id.clone(), self.client_secret.clone())
    }

    /// Overrides from environment variables, looked up through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_CLIENT_ID) {
            self.client_id = Some(v);
        }
        if let Some(v) = lookup(ENV_CLIENT_SECRET) {
            self.client_secret = Some(v);
        }
        if let Some(v) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout = parse_timeout(&v).ok_or_else(|| ConfigError::InvalidValue {
                section: "env".to_string(),
                key: ENV_TIMEOUT_SECS.to_string(),
                value: v.clone(),
                reason: "must be a positive integer (seconds)".to_string(),
            })?;
        }
        Ok(())
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Parses a positive whole number of seconds.
pub(super) fn parse_timeout(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
