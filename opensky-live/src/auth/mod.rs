//! OAuth2 client-credentials authentication
//!
//! Authentication is optional: without credentials every request is sent
//! anonymously. With credentials, [`TokenManager`] keeps a bearer token in an
//! explicitly owned [`TokenCache`] and refreshes it when it expires.
//!
//! ```ignore
//! use std::sync::Arc;
//! use opensky_live::auth::{ClientCredentials, SystemClock, TokenCache, TokenManager};
//!
//! let tokens = TokenManager::new(
//!     http.clone(),
//!     Some(ClientCredentials::new("id", "secret")),
//!     token_url,
//!     Arc::new(TokenCache::new()),
//!     Arc::new(SystemClock),
//! );
//! let bearer = tokens.get_token().await; // None when anonymous or on refresh failure
//! ```

mod cache;
mod manager;

pub use cache::{CachedToken, Clock, SystemClock, TokenCache};
pub use manager::{
    token_lifetime, ClientCredentials, TokenManager, DEFAULT_EXPIRES_IN_SECS,
    MIN_TOKEN_LIFETIME_SECS, TOKEN_EXPIRY_MARGIN_SECS,
};

#[cfg(test)]
pub use cache::tests::ManualClock;
