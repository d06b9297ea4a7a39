//! Named bounding-box presets.
//!
//! These are conveniences for demos and quick queries. Any bounding box can be
//! supplied directly; the catalog is never consulted for that.

use serde::Serialize;

use crate::coord::BoundingBox;

/// A named preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub bbox: BoundingBox,
}

/// Presets as (lat_min, lon_min, lat_max, lon_max).
static REGIONS: &[Region] = &[
    Region {
        name: "moscow",
        bbox: BoundingBox::from_trusted(55.20, 36.90, 56.10, 38.30),
    },
    Region {
        name: "spb",
        bbox: BoundingBox::from_trusted(59.50, 29.70, 60.20, 31.20),
    },
    Region {
        name: "komi",
        bbox: BoundingBox::from_trusted(58.90, 44.90, 68.70, 66.70),
    },
    Region {
        name: "komi_wide",
        bbox: BoundingBox::from_trusted(58.50, 44.00, 69.20, 67.20),
    },
];

/// Note attached to the catalog listing.
pub const CATALOG_NOTE: &str =
    "Presets are conveniences for quick queries; any bounding box can be supplied directly.";

/// Read-only lookup over the static presets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionCatalog;

impl RegionCatalog {
    /// All presets, in catalog order.
    pub fn regions(&self) -> &'static [Region] {
        REGIONS
    }

    /// Finds a preset by name, ignoring surrounding whitespace and ASCII case.
    pub fn lookup(&self, name: &str) -> Option<&'static Region> {
        let wanted = name.trim();
        REGIONS.iter().find(|r| r.name.eq_ignore_ascii_case(wanted))
    }

    /// Registered names, in catalog order.
    pub fn names(&self) -> Vec<String> {
        REGIONS.iter().map(|r| r.name.to_string()).collect()
    }
}

/// Listing returned by the `regions_catalog` operation.
#[derive(Debug, Clone, Serialize)]
pub struct RegionListing {
    pub regions: Vec<Region>,
    pub note: &'static str,
}

impl From<RegionCatalog> for RegionListing {
    fn from(catalog: RegionCatalog) -> Self {
        Self {
            regions: catalog.regions().to_vec(),
            note: CATALOG_NOTE,
        }
    }
}
