//! Normalization of OpenSky state vectors
//!
//! The `/states/all` endpoint encodes each aircraft as a positional array.
//! [`normalize`] maps the subset used downstream into named, unit-converted
//! [`FlightState`] records, and [`StatesSnapshot`] distinguishes an empty
//! airspace from a provider that has no coverage at all.

mod model;
mod normalize;

pub use model::{FlightState, UNKNOWN_CALLSIGN};
pub use normalize::{
    meters_to_feet, mps_to_kmh, normalize, StatesSnapshot, FEET_PER_METER, KMH_PER_MPS,
};
