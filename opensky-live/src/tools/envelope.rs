//! Tagged success/error envelope.

use serde::Serialize;

use crate::error::{FetchError, FetchResult};

/// `{"ok": true, "data": ...}` or `{"ok": false, "error": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchError>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: FetchError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<FetchResult<T>> for Envelope<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            Ok(data) => Envelope::success(data),
            Err(error) => Envelope::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::CoordError;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let envelope: Envelope<_> = Ok(json!({"count": 3})).into();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, json!({"ok": true, "data": {"count": 3}}));
    }

    #[test]
    fn test_failure_shape() {
        let result: FetchResult<u32> = Err(CoordError::InvalidLongitude(200.0).into());
        let json = serde_json::to_value(Envelope::from(result)).unwrap();
        assert_eq!(json["ok"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["kind"], "invalid_bbox");
        assert_eq!(json["error"]["where"], "bbox");
    }
}
