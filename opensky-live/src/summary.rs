//! Airspace leaderboards.
//!
//! Rankings use stable sorts, so entries with equal keys keep the order in
//! which they were observed.

use std::collections::HashMap;

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

use crate::coord::BoundingBox;
use crate::states::{FlightState, UNKNOWN_CALLSIGN};

/// Default number of entries per leaderboard.
pub const DEFAULT_TOP_N: usize = 5;

/// Prefix reported for aircraft without a callsign.
pub const UNKNOWN_PREFIX: &str = "UNK";

/// Number of leading callsign characters forming the prefix (airline ICAO code).
const PREFIX_LEN: usize = 3;

/// Note attached to every summary.
pub const SUMMARY_NOTE: &str = "Live OpenSky snapshot at the current moment.";

/// Occurrences of one callsign prefix.
///
/// Serializes as a `[prefix, count]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixCount {
    pub prefix: String,
    pub count: usize,
}

impl Serialize for PrefixCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.prefix)?;
        pair.serialize_element(&self.count)?;
        pair.end()
    }
}

/// Leaderboards over one set of normalized states.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub bbox: BoundingBox,
    /// All normalized states, independent of `top_n`.
    pub count: usize,
    pub top_by_speed: Vec<FlightState>,
    pub top_by_altitude: Vec<FlightState>,
    pub top_callsign_prefixes: Vec<PrefixCount>,
    pub note: &'static str,
}

/// Prefix of a callsign: its first three characters, or `UNK` for the sentinel.
pub fn callsign_prefix(callsign: &str) -> String {
    if callsign.is_empty() || callsign == UNKNOWN_CALLSIGN {
        return UNKNOWN_PREFIX.to_string();
    }
    callsign.chars().take(PREFIX_LEN).collect()
}

/// Full prefix tally, most frequent first, ties in first-encounter order.
pub fn prefix_tally(states: &[FlightState]) -> Vec<PrefixCount> {
    let mut order: HashMap<String, usize> = HashMap::new();
    let mut tally: Vec<PrefixCount> = Vec::new();

    for state in states {
        let prefix = callsign_prefix(&state.callsign);
        match order.get(&prefix) {
            Some(&slot) => tally[slot].count += 1,
            None => {
                order.insert(prefix.clone(), tally.len());
                tally.push(PrefixCount { prefix, count: 1 });
            }
        }
    }

    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

/// States with a value for `key`, highest first, at most `top_n`.
fn top_by<F>(states: &[FlightState], top_n: usize, key: F) -> Vec<FlightState>
where
    F: Fn(&FlightState) -> Option<f64>,
{
    let mut ranked: Vec<(f64, &FlightState)> = states
        .iter()
        .filter_map(|s| key(s).map(|value| (value, s)))
        .collect();

    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(_, s)| s.clone())
        .collect()
}

/// Builds the leaderboards for `states` observed inside `bbox`.
///
/// States lacking speed (or altitude) are left out of that ranking rather
/// than counted as zero.
pub fn summarize(bbox: BoundingBox, states: &[FlightState], top_n: usize) -> Summary {
    let mut prefixes = prefix_tally(states);
    prefixes.truncate(top_n);

    Summary {
        bbox,
        count: states.len(),
        top_by_speed: top_by(states, top_n, |s| s.speed_kmh),
        top_by_altitude: top_by(states, top_n, |s| s.altitude_ft),
        top_callsign_prefixes: prefixes,
        note: SUMMARY_NOTE,
    }
}
