//! HTTP plumbing shared by the token manager and the gateway
//!
//! The [`AsyncHttpClient`] trait is the seam between the OpenSky logic and the
//! network. Production code uses [`ReqwestClient`]; tests substitute a mock
//! with scripted responses.
//!
//! ```ignore
//! use std::time::Duration;
//! use opensky_live::provider::ReqwestClient;
//!
//! let http = ReqwestClient::with_timeout(Duration::from_secs(20))?;
//! ```

mod http;
mod query;

pub use http::{AsyncHttpClient, HttpResponse, ReqwestClient, TransportError};
pub use query::QueryParams;

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, RecordedRequest};
