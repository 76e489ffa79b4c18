mod utm;

pub use utm::UtmProjector;

use crate::config::Hemisphere;
use crate::constants::{UTM_ZONE_COUNT, UTM_ZONE_WIDTH_DEG};
use crate::error::{AreaSourceError, Result};

/// Forward and inverse geodetic transform between WGS84 latitude/longitude
/// and a UTM grid.
///
/// Coordinates on the grid side are easting/northing in metres.
pub trait Projector {
    /// Project `(lat_deg, lon_deg)` into `zone`, returning `(easting_m, northing_m)`.
    fn forward(
        &self,
        lat_deg: f64,
        lon_deg: f64,
        zone: u8,
        hemisphere: Hemisphere,
    ) -> Result<(f64, f64)>;

    /// Inverse of [`Projector::forward`], returning `(lat_deg, lon_deg)`.
    fn inverse(
        &self,
        easting_m: f64,
        northing_m: f64,
        zone: u8,
        hemisphere: Hemisphere,
    ) -> Result<(f64, f64)>;
}

/// UTM zone containing a longitude, `floor((lon + 180) / 6) mod 60 + 1`.
///
/// Both -180 and 180 map to zone 1. The result is always in 1..=60 for
/// finite input.
pub fn zone_for_longitude(lon_deg: f64) -> u8 {
    let band = ((lon_deg + 180.0) / UTM_ZONE_WIDTH_DEG).floor() as i64;
    (band.rem_euclid(UTM_ZONE_COUNT as i64) + 1) as u8
}

/// Longitude of a zone's central meridian in degrees.
pub fn central_meridian(zone: u8) -> f64 {
    zone as f64 * UTM_ZONE_WIDTH_DEG - 183.0
}

pub(crate) fn check_zone(zone: i64) -> Result<u8> {
    if (1..=UTM_ZONE_COUNT as i64).contains(&zone) {
        Ok(zone as u8)
    } else {
        Err(AreaSourceError::InvalidZone(zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_for_longitude() {
        assert_eq!(zone_for_longitude(0.0), 31);
        assert_eq!(zone_for_longitude(-180.0), 1);
        assert_eq!(zone_for_longitude(180.0), 1);
        assert_eq!(zone_for_longitude(-75.0), 18);
        assert_eq!(zone_for_longitude(-74.9), 18);
        assert_eq!(zone_for_longitude(179.9), 60);
        assert_eq!(zone_for_longitude(-0.1), 30);
        assert_eq!(zone_for_longitude(3.0), 31);
        assert_eq!(zone_for_longitude(6.0), 32);
    }

    #[test]
    fn test_zone_always_in_range() {
        let mut lon = -540.0;
        while lon <= 540.0 {
            let zone = zone_for_longitude(lon);
            assert!((1..=60).contains(&zone), "lon {} gave zone {}", lon, zone);
            lon += 0.7;
        }
    }

    #[test]
    fn test_central_meridian() {
        assert_eq!(central_meridian(1), -177.0);
        assert_eq!(central_meridian(18), -75.0);
        assert_eq!(central_meridian(31), 3.0);
        assert_eq!(central_meridian(60), 177.0);
    }

    #[test]
    fn test_check_zone() {
        assert_eq!(check_zone(1).unwrap(), 1);
        assert_eq!(check_zone(60).unwrap(), 60);
        assert!(matches!(check_zone(0), Err(AreaSourceError::InvalidZone(0))));
        assert!(check_zone(61).is_err());
        assert!(check_zone(-3).is_err());
    }
}
