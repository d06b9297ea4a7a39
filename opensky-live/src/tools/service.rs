//! The airspace tool set.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::auth::{SystemClock, TokenCache, TokenManager};
use crate::config::Settings;
use crate::coord::BoundingBox;
use crate::error::{FetchError, FetchResult};
use crate::gateway::{Gateway, STATES_ALL_PATH};
use crate::provider::{AsyncHttpClient, ReqwestClient, TransportError};
use crate::region::{RegionCatalog, RegionListing};
use crate::states::{normalize, FlightState, StatesSnapshot};
use crate::summary::{summarize, Summary};

/// Echo of a state query: the bounding box plus `extended: 1` when requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatesQuery {
    #[serde(flatten)]
    pub bbox: BoundingBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<u8>,
}

/// Raw provider payload for a bounding box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveStates {
    pub bbox: StatesQuery,
    pub raw: Value,
}

/// Normalized states for a bounding box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStates {
    pub bbox: BoundingBox,
    pub count: usize,
    pub states: Vec<FlightState>,
}

/// Whether the provider currently covers a bounding box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub bbox: BoundingBox,
    #[serde(flatten)]
    pub snapshot: StatesSnapshot,
}

/// Canonical set of airspace operations.
pub struct AirspaceTools<C: AsyncHttpClient> {
    gateway: Gateway<C>,
    catalog: RegionCatalog,
    default_top_n: usize,
}

impl AirspaceTools<ReqwestClient> {
    /// Wires the production stack: one reqwest client (shared timeout), a
    /// fresh token cache and the system clock.
    pub fn from_settings(settings: &Settings) -> Result<Self, TransportError> {
        let http = ReqwestClient::with_timeout(settings.timeout)?;
        let tokens = TokenManager::new(
            http.clone(),
            settings.credentials(),
            settings.token_url.clone(),
            Arc::new(TokenCache::new()),
            Arc::new(SystemClock),
        );

        info!(
            api_url = %settings.api_url,
            authenticated = tokens.is_configured(),
            timeout_secs = settings.timeout.as_secs(),
            "OpenSky tools ready"
        );

        let gateway = Gateway::new(http, tokens, settings.api_url.clone());
        Ok(Self::new(gateway, settings.default_top_n))
    }
}

impl<C: AsyncHttpClient> AirspaceTools<C> {
    pub fn new(gateway: Gateway<C>, default_top_n: usize) -> Self {
        Self {
            gateway,
            catalog: RegionCatalog,
            default_top_n,
        }
    }

    pub fn gateway(&self) -> &Gateway<C> {
        &self.gateway
    }

    /// Lists the region presets.
    pub fn regions_catalog(&self) -> RegionListing {
        RegionListing::from(self.catalog)
    }

    async fn fetch_states(&self, bbox: BoundingBox, extended: bool) -> FetchResult<Value> {
        let mut params = bbox.to_query();
        if extended {
            params.push("extended", 1);
        }
        self.gateway.fetch(STATES_ALL_PATH, &params).await
    }

    /// Raw `/states/all` payload inside `bbox`.
    pub async fn live_states(&self, bbox: BoundingBox, extended: bool) -> FetchResult<LiveStates> {
        let raw = self.fetch_states(bbox, extended).await?;
        Ok(LiveStates {
            bbox: StatesQuery {
                bbox,
                extended: extended.then_some(1),
            },
            raw,
        })
    }

    /// Normalized states inside `bbox`.
    pub async fn normalized_states(&self, bbox: BoundingBox) -> FetchResult<NormalizedStates> {
        let raw = self.fetch_states(bbox, false).await?;
        let states = normalize(&raw);
        Ok(NormalizedStates {
            bbox,
            count: states.len(),
            states,
        })
    }

    /// Leaderboards for `bbox`; `top_n` falls back to the configured default.
    pub async fn airspace_summary(
        &self,
        bbox: BoundingBox,
        top_n: Option<usize>,
    ) -> FetchResult<Summary> {
        let top_n = top_n.unwrap_or(self.default_top_n);
        let normalized = self.normalized_states(bbox).await?;
        debug!(count = normalized.count, top_n = top_n, "Summarizing airspace");
        Ok(summarize(bbox, &normalized.states, top_n))
    }

    /// Leaderboards for a catalog region.
    ///
    /// An unregistered name yields an `unknown_region` error listing every
    /// valid name; no request is made in that case.
    pub async fn airspace_summary_by_region(
        &self,
        region: &str,
        top_n: Option<usize>,
    ) -> FetchResult<Summary> {
        let Some(preset) = self.catalog.lookup(region) else {
            return Err(FetchError::unknown_region(region, self.catalog.names()));
        };
        self.airspace_summary(preset.bbox, top_n).await
    }

    /// Health check: does the provider currently cover `bbox`?
    ///
    /// A `null` state list is reported as `no_coverage`, which is a successful
    /// result, distinct from any fetch error.
    pub async fn coverage(&self, bbox: BoundingBox) -> FetchResult<CoverageReport> {
        let raw = self.fetch_states(bbox, false).await?;
        Ok(CoverageReport {
            bbox,
            snapshot: StatesSnapshot::from_raw(&raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ManualClock;
    use crate::error::ErrorKind;
    use crate::provider::{HttpResponse, MockAsyncHttpClient};
    use crate::summary::DEFAULT_TOP_N;
    use serde_json::json;

    fn tools(mock: &MockAsyncHttpClient) -> AirspaceTools<MockAsyncHttpClient> {
        let tokens = TokenManager::anonymous(mock.clone(), Arc::new(ManualClock::new()));
        AirspaceTools::new(
            Gateway::new(mock.clone(), tokens, "https://opensky.test/api"),
            DEFAULT_TOP_N,
        )
    }

    fn bbox() -> BoundingBox {
        BoundingBox::new(55.2, 36.9, 56.1, 38.3).unwrap()
    }

    fn payload() -> String {
        json!({
            "time": 1700000000,
            "states": [
                ["a1", "AFL100  ", "Russia", 0, 1700000000, 37.4, 55.9, 11000, false, 230, 45],
                ["a2", "SDM22", "Russia", 0, 1700000000, 37.5, 55.8, 9000, false, 240, 90],
                ["a3", "", "Russia", 0, 1700000000, 37.6, 55.7, null, true, 5, 180],
                ["a4", "AFL7", "Russia", 0, 1700000000, null, 55.7, 3000, false, 150, 0]
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_live_states_extended_flag() {
        let mock = MockAsyncHttpClient::new();
        mock.push_get(Ok(HttpResponse::new(200, payload())));
        mock.push_get(Ok(HttpResponse::new(200, payload())));
        let tools = tools(&mock);

        let live = tools.live_states(bbox(), true).await.unwrap();
        assert_eq!(live.raw["time"], 1700000000);
        let echo = serde_json::to_value(live.bbox).unwrap();
        assert_eq!(
            echo,
            json!({"lamin": 55.2, "lomin": 36.9, "lamax": 56.1, "lomax": 38.3, "extended": 1})
        );

        let plain = tools.live_states(bbox(), false).await.unwrap();
        let echo = serde_json::to_value(plain.bbox).unwrap();
        assert!(echo.get("extended").is_none());
        assert_eq!(echo["lamin"], 55.2);

        let requests = mock.requests();
        let extended: Vec<Option<&str>> = requests
            .iter()
            .map(|r| {
                r.query
                    .iter()
                    .find(|(k, _)| k == "extended")
                    .map(|(_, v)| v.as_str())
            })
            .collect();
        assert_eq!(extended, vec![Some("1"), None]);
        assert_eq!(requests[0].query[0], ("lamin".to_string(), "55.2".to_string()));
    }

    #[tokio::test]
    async fn test_normalized_states() {
        let mock = MockAsyncHttpClient::new();
        mock.push_get(Ok(HttpResponse::new(200, payload())));

        let normalized = tools(&mock).normalized_states(bbox()).await.unwrap();
        assert_eq!(normalized.count, 3);
        assert_eq!(normalized.states[0].callsign, "AFL100");
        assert_eq!(normalized.states[2].callsign, "UNKNOWN");
    }

    #[tokio::test]
    async fn test_summary() {
        let mock = MockAsyncHttpClient::new();
        mock.push_get(Ok(HttpResponse::new(200, payload())));

        let summary = tools(&mock).airspace_summary(bbox(), Some(2)).await.unwrap();
        assert_eq!(summary.count, 3);
        let fastest: Vec<&str> = summary.top_by_speed.iter().map(|s| s.icao24.as_str()).collect();
        assert_eq!(fastest, vec!["a2", "a1"]);
        let highest: Vec<&str> = summary
            .top_by_altitude
            .iter()
            .map(|s| s.icao24.as_str())
            .collect();
        assert_eq!(highest, vec!["a1", "a2"]);
        assert_eq!(summary.top_callsign_prefixes.len(), 2);
        assert_eq!(summary.top_callsign_prefixes[0].prefix, "AFL");
        assert_eq!(
            serde_json::to_value(&summary).unwrap()["top_callsign_prefixes"][0],
            json!(["AFL", 1])
        );
    }

    #[tokio::test]
    async fn test_summary_propagates_gateway_error() {
        let mock = MockAsyncHttpClient::new();
        mock.push_get(Ok(HttpResponse::new(502, "")));

        let err = tools(&mock).airspace_summary(bbox(), None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::HttpStatus);
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_region_summary_uses_preset() {
        let mock = MockAsyncHttpClient::new();
        mock.push_get(Ok(HttpResponse::new(200, payload())));

        let summary = tools(&mock)
            .airspace_summary_by_region("Moscow", None)
            .await
            .unwrap();
        assert_eq!(summary.bbox, bbox());
        assert_eq!(mock.requests()[0].query.len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_region_makes_no_request() {
        let mock = MockAsyncHttpClient::new();

        let err = tools(&mock)
            .airspace_summary_by_region("atlantis", None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownRegion);
        assert_eq!(
            err.context.valid_regions,
            Some(vec![
                "moscow".to_string(),
                "spb".to_string(),
                "komi".to_string(),
                "komi_wide".to_string()
            ])
        );
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_coverage_distinguishes_null_states() {
        let mock = MockAsyncHttpClient::new();
        mock.push_get(Ok(HttpResponse::new(200, r#"{"time":5,"states":null}"#)));
        mock.push_get(Ok(HttpResponse::new(200, payload())));
        let tools = tools(&mock);

        let none = tools.coverage(bbox()).await.unwrap();
        assert!(!none.snapshot.has_coverage());
        let json = serde_json::to_value(&none).unwrap();
        assert_eq!(json["status"], "no_coverage");
        assert_eq!(json["bbox"]["lamin"], 55.2);

        let live = tools.coverage(bbox()).await.unwrap();
        assert_eq!(
            live.snapshot,
            StatesSnapshot::Live {
                time: Some(1700000000),
                aircraft: 4
            }
        );
    }

    #[test]
    fn test_regions_catalog() {
        let mock = MockAsyncHttpClient::new();
        let listing = tools(&mock).regions_catalog();
        assert_eq!(listing.regions.len(), 4);
    }
}
