//! Operations exposed to the host, and the envelope they are returned in.
//!
//! ```text
//! caller ──► AirspaceTools ──► Gateway ──► TokenManager (optional bearer)
//!                 │                │
//!                 │                └──► OpenSky /states/all
//!                 ├──► states::normalize
//!                 └──► summary::summarize
//! ```
//!
//! Every operation returns a [`FetchResult`](crate::error::FetchResult); the
//! host wraps it in an [`Envelope`] whose `ok` field it branches on.

mod envelope;
mod service;

pub use envelope::Envelope;
pub use service::{AirspaceTools, CoverageReport, LiveStates, NormalizedStates, StatesQuery};
