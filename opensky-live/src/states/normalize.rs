//! Positional-array decoding.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::model::{FlightState, UNKNOWN_CALLSIGN};

/// Meters to feet.
pub const FEET_PER_METER: f64 = 3.28084;

/// Meters per second to kilometres per hour.
pub const KMH_PER_MPS: f64 = 3.6;

// Field positions in an OpenSky state vector.
const IDX_ICAO24: usize = 0;
const IDX_CALLSIGN: usize = 1;
const IDX_ORIGIN_COUNTRY: usize = 2;
const IDX_LAST_CONTACT: usize = 4;
const IDX_LONGITUDE: usize = 5;
const IDX_LATITUDE: usize = 6;
const IDX_BARO_ALTITUDE: usize = 7;
const IDX_ON_GROUND: usize = 8;
const IDX_VELOCITY: usize = 9;
const IDX_TRUE_TRACK: usize = 10;

#[inline]
pub fn meters_to_feet(meters: Option<f64>) -> Option<f64> {
    meters.map(|m| m * FEET_PER_METER)
}

#[inline]
pub fn mps_to_kmh(mps: Option<f64>) -> Option<f64> {
    mps.map(|v| v * KMH_PER_MPS)
}

fn field(record: &[Value], index: usize) -> Option<&Value> {
    record.get(index).filter(|v| !v.is_null())
}

fn f64_at(record: &[Value], index: usize) -> Option<f64> {
    field(record, index).and_then(Value::as_f64)
}

fn str_at(record: &[Value], index: usize) -> Option<&str> {
    field(record, index).and_then(Value::as_str)
}

fn normalize_record(record: &[Value]) -> Option<FlightState> {
    let latitude = f64_at(record, IDX_LATITUDE)?;
    let longitude = f64_at(record, IDX_LONGITUDE)?;

    let callsign = match str_at(record, IDX_CALLSIGN).map(str::trim) {
        Some(cs) if !cs.is_empty() => cs.to_string(),
        _ => UNKNOWN_CALLSIGN.to_string(),
    };

    Some(FlightState {
        icao24: str_at(record, IDX_ICAO24).unwrap_or_default().to_string(),
        callsign,
        origin_country: str_at(record, IDX_ORIGIN_COUNTRY)
            .unwrap_or_default()
            .to_string(),
        latitude,
        longitude,
        altitude_ft: meters_to_feet(f64_at(record, IDX_BARO_ALTITUDE)),
        speed_kmh: mps_to_kmh(f64_at(record, IDX_VELOCITY)),
        track_deg: f64_at(record, IDX_TRUE_TRACK),
        on_ground: field(record, IDX_ON_GROUND).and_then(Value::as_bool),
        last_contact: f64_at(record, IDX_LAST_CONTACT).map(|t| t as i64),
    })
}

/// Converts a raw `/states/all` payload into flight states.
///
/// Records without latitude or longitude are dropped; every other record is
/// kept, in input order. A missing or `null` `states` member yields an empty
/// list. Pure: no I/O.
pub fn normalize(raw: &Value) -> Vec<FlightState> {
    let Some(records) = raw.get("states").and_then(Value::as_array) else {
        return Vec::new();
    };

    let states: Vec<FlightState> = records
        .iter()
        .filter_map(Value::as_array)
        .filter_map(|record| normalize_record(record))
        .collect();

    debug!(
        records = records.len(),
        kept = states.len(),
        "Normalized state vectors"
    );

    states
}

/// Coverage classification of a raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatesSnapshot {
    /// The provider returned a state list (possibly empty).
    Live { time: Option<i64>, aircraft: usize },
    /// `states` was `null` or absent: nothing is covering this area right now.
    NoCoverage { time: Option<i64> },
}

impl StatesSnapshot {
    pub fn from_raw(raw: &Value) -> Self {
        let time = raw.get("time").and_then(Value::as_i64);
        match raw.get("states").and_then(Value::as_array) {
            Some(records) => StatesSnapshot::Live {
                time,
                aircraft: records.len(),
            },
            None => StatesSnapshot::NoCoverage { time },
        }
    }

    pub fn has_coverage(&self) -> bool {
        matches!(self, StatesSnapshot::Live { .. })
    }
}
