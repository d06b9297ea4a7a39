//! OpenSky Live - real-time aircraft tracking over the OpenSky Network API
//!
//! This library fetches live state vectors for a geographic bounding box,
//! normalizes them into typed flight records and condenses them into
//! airspace summaries. Every operation returns a soft error value instead of
//! failing, so a host can always render a structured result.

pub mod auth;
pub mod config;
pub mod coord;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod provider;
pub mod region;
pub mod states;
pub mod summary;
pub mod tools;

/// Library version, also sent in the User-Agent header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
