//! Bounding-box flags shared by the bbox subcommands.

use clap::Args;
use opensky_live::coord::BoundingBox;
use opensky_live::error::FetchError;

/// `--lamin --lomin --lamax --lomax`, in decimal degrees.
#[derive(Debug, Clone, Copy, Args)]
pub struct BboxArgs {
    /// Southern latitude bound
    #[arg(long, allow_negative_numbers = true)]
    pub lamin: f64,

    /// Western longitude bound
    #[arg(long, allow_negative_numbers = true)]
    pub lomin: f64,

    /// Northern latitude bound
    #[arg(long, allow_negative_numbers = true)]
    pub lamax: f64,

    /// Eastern longitude bound
    #[arg(long, allow_negative_numbers = true)]
    pub lomax: f64,
}

impl BboxArgs {
    /// Validates the flags; a rejected box becomes an `invalid_bbox` error.
    pub fn to_bbox(&self) -> Result<BoundingBox, FetchError> {
        BoundingBox::new(self.lamin, self.lomin, self.lamax, self.lomax).map_err(FetchError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensky_live::error::ErrorKind;

    fn args(lamin: f64, lomin: f64, lamax: f64, lomax: f64) -> BboxArgs {
        BboxArgs {
            lamin,
            lomin,
            lamax,
            lomax,
        }
    }

    #[test]
    fn test_valid_box() {
        let bbox = args(51.0, -1.0, 52.0, 1.0).to_bbox().unwrap();
        assert_eq!(bbox.lat_min(), 51.0);
        assert_eq!(bbox.lon_max(), 1.0);
    }

    #[test]
    fn test_inverted_box_is_invalid_bbox() {
        let err = args(52.0, -1.0, 51.0, 1.0).to_bbox().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidBbox);
    }
}
