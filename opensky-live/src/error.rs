//! Soft-error taxonomy shared by every operation.
//!
//! Failures are values, not panics: the gateway converts transport and HTTP
//! failures into a [`FetchError`] exactly once, and the layers above pass it
//! through unchanged with `?`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::coord::CoordError;
use crate::provider::{QueryParams, TransportError};

/// Subsystem tag for failures talking to the OpenSky API.
pub const WHERE_OPENSKY: &str = "opensky";

/// Subsystem tag for region catalog lookups.
pub const WHERE_REGIONS: &str = "regions";

/// Subsystem tag for bounding box validation.
pub const WHERE_BBOX: &str = "bbox";

/// Result type returned by every I/O-touching operation.
pub type FetchResult<T> = Result<T, FetchError>;

/// Machine-readable failure category. Callers branch on this, not on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport or connection failure before any response.
    ConnectError,
    /// No response within the timeout budget.
    Timeout,
    /// A response arrived with a non-2xx status.
    HttpStatus,
    /// Any other failure, including undecodable bodies.
    Unknown,
    /// The caller named a region the catalog does not know.
    UnknownRegion,
    /// The caller supplied a bounding box that failed validation.
    InvalidBbox,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConnectError => "connect_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::HttpStatus => "http_status",
            ErrorKind::Unknown => "unknown",
            ErrorKind::UnknownRegion => "unknown_region",
            ErrorKind::InvalidBbox => "invalid_bbox",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic details attached to a [`FetchError`]. Absent fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<QueryParams>,

    /// HTTP status, only for [`ErrorKind::HttpStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Registered names, only for [`ErrorKind::UnknownRegion`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_regions: Option<Vec<String>>,
}

impl ErrorContext {
    fn request(url: &str, params: &QueryParams) -> Self {
        Self {
            url: Some(url.to_string()),
            params: Some(params.clone()),
            ..Default::default()
        }
    }
}

/// A structured soft error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{origin} {kind}: {message}")]
pub struct FetchError {
    #[serde(rename = "where")]
    pub origin: &'static str,
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl FetchError {
    /// Classifies a transport failure for a provider request.
    pub fn from_transport(error: TransportError, url: &str, params: &QueryParams) -> Self {
        let kind = match error {
            TransportError::Connect(_) => ErrorKind::ConnectError,
            TransportError::Timeout(_) => ErrorKind::Timeout,
            TransportError::Other(_) => ErrorKind::Unknown,
        };
        Self {
            origin: WHERE_OPENSKY,
            kind,
            message: error.to_string(),
            context: ErrorContext::request(url, params),
        }
    }

    /// A provider response with a non-2xx status.
    pub fn http_status(status: u16, url: &str, params: &QueryParams) -> Self {
        let mut context = ErrorContext::request(url, params);
        context.status = Some(status);
        Self {
            origin: WHERE_OPENSKY,
            kind: ErrorKind::HttpStatus,
            message: format!("HTTP {} from {}", status, url),
            context,
        }
    }

    /// Any other provider-side failure.
    pub fn unknown(message: impl Into<String>, url: &str, params: &QueryParams) -> Self {
        Self {
            origin: WHERE_OPENSKY,
            kind: ErrorKind::Unknown,
            message: message.into(),
            context: ErrorContext::request(url, params),
        }
    }

    /// Region lookup miss, listing every registered name.
    pub fn unknown_region(name: &str, valid_regions: Vec<String>) -> Self {
        Self {
            origin: WHERE_REGIONS,
            kind: ErrorKind::UnknownRegion,
            message: format!(
                "Unknown region '{}'. Valid regions: {}",
                name,
                valid_regions.join(", ")
            ),
            context: ErrorContext {
                valid_regions: Some(valid_regions),
                ..Default::default()
            },
        }
    }

    /// HTTP status for [`ErrorKind::HttpStatus`] errors.
    pub fn status(&self) -> Option<u16> {
        self.context.status
    }
}

impl From<CoordError> for FetchError {
    fn from(e: CoordError) -> Self {
        Self {
            origin: WHERE_BBOX,
            kind: ErrorKind::InvalidBbox,
            message: e.to_string(),
            context: ErrorContext::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> QueryParams {
        QueryParams::new().with("lamin", 1).with("lomin", 2)
    }

    #[test]
    fn test_transport_classification() {
        let url = "https://opensky-network.org/api/states/all";
        let cases = [
            (TransportError::Connect("refused".into()), ErrorKind::ConnectError),
            (TransportError::Timeout("20s".into()), ErrorKind::Timeout),
            (TransportError::Other("boom".into()), ErrorKind::Unknown),
        ];
        for (transport, kind) in cases {
            let err = FetchError::from_transport(transport, url, &params());
            assert_eq!(err.kind, kind);
            assert_eq!(err.origin, "opensky");
            assert_eq!(err.context.url.as_deref(), Some(url));
            assert_eq!(err.context.params, Some(params()));
            assert_eq!(err.status(), None);
        }
    }

    #[test]
    fn test_http_status_carries_code() {
        let err = FetchError::http_status(429, "https://x/states/all", &params());
        assert_eq!(err.kind, ErrorKind::HttpStatus);
        assert_eq!(err.status(), Some(429));
        assert!(err.message.contains("429"));
    }

    #[test]
    fn test_http_status_json_shape() {
        let err = FetchError::http_status(503, "https://x/states/all", &params());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["where"], "opensky");
        assert_eq!(json["kind"], "http_status");
        assert_eq!(json["context"]["status"], 503);
        assert_eq!(json["context"]["params"]["lamin"], "1");
        assert!(json["context"].get("valid_regions").is_none());
    }

    #[test]
    fn test_unknown_region_lists_names() {
        let err = FetchError::unknown_region("atlantis", vec!["moscow".into(), "spb".into()]);
        assert_eq!(err.kind, ErrorKind::UnknownRegion);
        assert_eq!(err.origin, "regions");
        assert!(err.message.contains("atlantis"));
        assert!(err.message.contains("moscow, spb"));

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["context"]["valid_regions"], serde_json::json!(["moscow", "spb"]));
        assert!(json["context"].get("url").is_none());
    }

    #[test]
    fn test_invalid_bbox_from_coord_error() {
        let err: FetchError = CoordError::InvalidLatitude(95.0).into();
        assert_eq!(err.kind, ErrorKind::InvalidBbox);
        assert_eq!(err.origin, "bbox");
        assert!(err.to_string().starts_with("bbox invalid_bbox:"));
    }

    #[test]
    fn test_kind_display_matches_serde() {
        for kind in [
            ErrorKind::ConnectError,
            ErrorKind::Timeout,
            ErrorKind::HttpStatus,
            ErrorKind::Unknown,
            ErrorKind::UnknownRegion,
            ErrorKind::InvalidBbox,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.to_string()));
        }
    }
}
