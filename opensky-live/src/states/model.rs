//! Normalized flight state record.

use serde::Serialize;

/// Callsign used when the transponder broadcast none.
pub const UNKNOWN_CALLSIGN: &str = "UNKNOWN";

/// One aircraft as observed in a single fetch.
///
/// Optional fields stay `None` when the provider had no data; they are never
/// replaced with a numeric sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightState {
    /// 24-bit ICAO transponder address, hex.
    pub icao24: String,
    /// Trimmed callsign, or [`UNKNOWN_CALLSIGN`].
    pub callsign: String,
    pub origin_country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Barometric altitude in feet.
    pub altitude_ft: Option<f64>,
    /// Ground speed in km/h.
    pub speed_kmh: Option<f64>,
    /// True track in degrees clockwise from north.
    pub track_deg: Option<f64>,
    pub on_ground: Option<bool>,
    /// Unix seconds of the last message received from the transponder.
    pub last_contact: Option<i64>,
}

impl FlightState {
    /// True when the callsign is the [`UNKNOWN_CALLSIGN`] sentinel.
    pub fn has_unknown_callsign(&self) -> bool {
        self.callsign == UNKNOWN_CALLSIGN
    }
}
