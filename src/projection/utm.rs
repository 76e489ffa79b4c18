use std::f64::consts::FRAC_PI_2;

use super::{Projector, central_meridian, check_zone};
use crate::config::Hemisphere;
use crate::constants::{
    UTM_FALSE_EASTING_M, UTM_SCALE_FACTOR, UTM_SOUTH_FALSE_NORTHING_M, WGS84_INVERSE_FLATTENING,
    WGS84_SEMI_MAJOR_M,
};
use crate::error::{AreaSourceError, Result};

/// Transverse Mercator on the WGS84 ellipsoid using the Krüger series,
/// third order in n (millimetre accuracy within a zone).
#[derive(Debug, Clone)]
pub struct UtmProjector {
    /// Rectifying radius scaled by k0
    k0_a: f64,
    /// First eccentricity
    e: f64,
    alpha: [f64; 3],
    beta: [f64; 3],
    delta: [f64; 3],
    southern_false_northing: bool,
}

impl Default for UtmProjector {
    fn default() -> Self {
        Self::new(true)
    }
}

impl UtmProjector {
    /// `southern_false_northing` selects whether southern hemisphere
    /// northings carry the standard 10 000 000 m offset. Without it the
    /// hemisphere is ignored and southern northings are negative.
    pub fn new(southern_false_northing: bool) -> Self {
        let f = 1.0 / WGS84_INVERSE_FLATTENING;
        let n = f / (2.0 - f);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;

        let a_rect = WGS84_SEMI_MAJOR_M / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);

        Self {
            k0_a: UTM_SCALE_FACTOR * a_rect,
            e: 2.0 * n.sqrt() / (1.0 + n),
            alpha: [
                n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0,
                13.0 * n2 / 48.0 - 3.0 * n3 / 5.0,
                61.0 * n3 / 240.0,
            ],
            beta: [
                n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0,
                n2 / 48.0 + n3 / 15.0,
                17.0 * n3 / 480.0,
            ],
            delta: [
                2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3,
                7.0 * n2 / 3.0 - 8.0 * n3 / 5.0,
                56.0 * n3 / 15.0,
            ],
            southern_false_northing,
        }
    }

    fn false_northing(&self, hemisphere: Hemisphere) -> f64 {
        match hemisphere {
            Hemisphere::South if self.southern_false_northing => UTM_SOUTH_FALSE_NORTHING_M,
            _ => 0.0,
        }
    }
}

/// Wrap a longitude difference into (-180, 180].
fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

impl Projector for UtmProjector {
    fn forward(
        &self,
        lat_deg: f64,
        lon_deg: f64,
        zone: u8,
        hemisphere: Hemisphere,
    ) -> Result<(f64, f64)> {
        let zone = check_zone(zone as i64)?;
        if !lat_deg.is_finite() || !lon_deg.is_finite() {
            return Err(AreaSourceError::Projection(format!(
                "non-finite coordinate ({}, {})",
                lat_deg, lon_deg
            )));
        }
        if lat_deg.abs() > 90.0 {
            return Err(AreaSourceError::Projection(format!(
                "latitude {} outside [-90, 90]",
                lat_deg
            )));
        }

        let dlon_deg = wrap_degrees(lon_deg - central_meridian(zone));
        if dlon_deg.abs() >= 90.0 {
            return Err(AreaSourceError::Projection(format!(
                "longitude {} is {:.1} degrees from the zone {} central meridian",
                lon_deg, dlon_deg, zone
            )));
        }

        let sin_phi = lat_deg.to_radians().sin();
        let dlon = dlon_deg.to_radians();

        // Conformal latitude
        let t = (sin_phi.atanh() - self.e * (self.e * sin_phi).atanh()).sinh();
        let xi_p = t.atan2(dlon.cos());
        let eta_p = (dlon.sin() / (1.0 + t * t).sqrt()).atanh();

        let mut xi = xi_p;
        let mut eta = eta_p;
        for (j, alpha) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi += alpha * (k * xi_p).sin() * (k * eta_p).cosh();
            eta += alpha * (k * xi_p).cos() * (k * eta_p).sinh();
        }

        let easting = UTM_FALSE_EASTING_M + self.k0_a * eta;
        let northing = self.false_northing(hemisphere) + self.k0_a * xi;

        if !easting.is_finite() || !northing.is_finite() {
            return Err(AreaSourceError::Projection(format!(
                "({}, {}) has no finite UTM position in zone {}",
                lat_deg, lon_deg, zone
            )));
        }
        Ok((easting, northing))
    }

    fn inverse(
        &self,
        easting_m: f64,
        northing_m: f64,
        zone: u8,
        hemisphere: Hemisphere,
    ) -> Result<(f64, f64)> {
        let zone = check_zone(zone as i64)?;
        if !easting_m.is_finite() || !northing_m.is_finite() {
            return Err(AreaSourceError::Projection(format!(
                "non-finite UTM coordinate ({}, {})",
                easting_m, northing_m
            )));
        }

        let xi = (northing_m - self.false_northing(hemisphere)) / self.k0_a;
        let eta = (easting_m - UTM_FALSE_EASTING_M) / self.k0_a;

        let mut xi_p = xi;
        let mut eta_p = eta;
        for (j, beta) in self.beta.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi_p -= beta * (k * xi).sin() * (k * eta).cosh();
            eta_p -= beta * (k * xi).cos() * (k * eta).sinh();
        }

        if xi_p.abs() > FRAC_PI_2 {
            return Err(AreaSourceError::Projection(format!(
                "northing {} m is beyond the pole in zone {}{}",
                northing_m, zone, hemisphere
            )));
        }

        let chi = (xi_p.sin() / eta_p.cosh()).asin();
        let mut phi = chi;
        for (j, delta) in self.delta.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            phi += delta * (k * chi).sin();
        }
        let dlon = eta_p.sinh().atan2(xi_p.cos());

        let lat_deg = phi.to_degrees();
        let lon_deg = wrap_degrees(central_meridian(zone) + dlon.to_degrees());

        if !lat_deg.is_finite() || !lon_deg.is_finite() {
            return Err(AreaSourceError::Projection(format!(
                "({}, {}) is outside the projection domain of zone {}",
                easting_m, northing_m, zone
            )));
        }
        Ok((lat_deg, lon_deg))
    }
}
