//! Geographic bounding boxes
//!
//! Every state query is scoped by a [`BoundingBox`]. Boxes are validated at
//! construction so an inverted or out-of-range box never reaches the provider.

mod types;

pub use types::{BoundingBox, CoordError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

#[cfg(test)]
mod tests;
