//! Coordinate normalization for area source vertices.
//!
//! Callers supply the quadrilateral either as geographic lat/lon or as UTM
//! kilometres with zone and hemisphere. [`normalize`] fills in whichever
//! representation is missing so that both can be written.
//!
//! The UTM zone for geographic input is taken from the first vertex only. A
//! quadrilateral straddling a zone boundary is projected entirely in that
//! zone; this is logged but otherwise accepted.

use crate::config::Hemisphere;
use crate::constants::{METRES_PER_KM, VERTEX_COUNT};
use crate::error::{AreaSourceError, Result};
use crate::projection::{Projector, check_zone, zone_for_longitude};

pub type Quad = [f64; VERTEX_COUNT];

/// Caller-supplied vertex coordinates
///
/// At least one representation must be complete. When both are present
/// they are written as given.
#[derive(Debug, Clone, Default)]
pub struct CoordinateInput {
    pub lat: Option<Vec<f64>>,
    pub lon: Option<Vec<f64>>,
    pub x_km: Option<Vec<f64>>,
    pub y_km: Option<Vec<f64>>,
    pub utm_zone: Option<i64>,
    pub utm_hemisphere: Option<String>,
}

impl CoordinateInput {
    pub fn geographic(lat: Vec<f64>, lon: Vec<f64>) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            ..Self::default()
        }
    }

    pub fn projected(x_km: Vec<f64>, y_km: Vec<f64>, utm_zone: i64, utm_hemisphere: &str) -> Self {
        Self::default().with_projected(x_km, y_km, utm_zone, utm_hemisphere)
    }

    pub fn with_projected(
        mut self,
        x_km: Vec<f64>,
        y_km: Vec<f64>,
        utm_zone: i64,
        utm_hemisphere: &str,
    ) -> Self {
        self.x_km = Some(x_km);
        self.y_km = Some(y_km);
        self.utm_zone = Some(utm_zone);
        self.utm_hemisphere = Some(utm_hemisphere.to_string());
        self
    }
}

/// Both coordinate representations of the four vertices
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCoordinates {
    pub lat: Quad,
    pub lon: Quad,
    pub x_km: Quad,
    pub y_km: Quad,
    pub utm_zone: u8,
    pub utm_hemisphere: Hemisphere,
}

struct Geographic {
    lat: Quad,
    lon: Quad,
}

struct Projected {
    x_km: Quad,
    y_km: Quad,
    zone: u8,
    hemisphere: Hemisphere,
}

fn to_quad(field: &'static str, values: &[f64]) -> Result<Quad> {
    let quad: Quad = values
        .try_into()
        .map_err(|_| AreaSourceError::CoordinateLength {
            field,
            expected: VERTEX_COUNT,
            actual: values.len(),
        })?;
    if let Some(bad) = quad.iter().find(|v| !v.is_finite()) {
        return Err(AreaSourceError::NonFinite(field, *bad));
    }
    Ok(quad)
}

fn geographic_part(input: &CoordinateInput) -> Result<Option<Geographic>> {
    match (&input.lat, &input.lon) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(AreaSourceError::IncompleteCoordinates("geographic", "lon")),
        (None, Some(_)) => Err(AreaSourceError::IncompleteCoordinates("geographic", "lat")),
        (Some(lat), Some(lon)) => Ok(Some(Geographic {
            lat: to_quad("lat", lat)?,
            lon: to_quad("lon", lon)?,
        })),
    }
}

fn projected_part(input: &CoordinateInput) -> Result<Option<Projected>> {
    if input.x_km.is_none()
        && input.y_km.is_none()
        && input.utm_zone.is_none()
        && input.utm_hemisphere.is_none()
    {
        return Ok(None);
    }

    let missing = |name: &'static str| AreaSourceError::IncompleteCoordinates("projected", name);
    let x_km = input.x_km.as_deref().ok_or_else(|| missing("x_km"))?;
    let y_km = input.y_km.as_deref().ok_or_else(|| missing("y_km"))?;
    let zone = input.utm_zone.ok_or_else(|| missing("utm_zone"))?;
    let hemisphere = input
        .utm_hemisphere
        .as_deref()
        .ok_or_else(|| missing("utm_hemisphere"))?;

    Ok(Some(Projected {
        x_km: to_quad("x_km", x_km)?,
        y_km: to_quad("y_km", y_km)?,
        zone: check_zone(zone)?,
        hemisphere: hemisphere.parse()?,
    }))
}

/// Validate the input and derive the missing representation.
///
/// All validation happens before any projection call.
pub fn normalize<P: Projector + ?Sized>(
    input: &CoordinateInput,
    projector: &P,
) -> Result<NormalizedCoordinates> {
    let geographic = geographic_part(input)?;
    let projected = projected_part(input)?;

    match (geographic, projected) {
        (None, None) => Err(AreaSourceError::MissingCoordinates),
        (Some(geo), None) => project_forward(geo, projector),
        (None, Some(utm)) => project_inverse(utm, projector),
        (Some(geo), Some(utm)) => Ok(NormalizedCoordinates {
            lat: geo.lat,
            lon: geo.lon,
            x_km: utm.x_km,
            y_km: utm.y_km,
            utm_zone: utm.zone,
            utm_hemisphere: utm.hemisphere,
        }),
    }
}

fn project_forward<P: Projector + ?Sized>(
    geo: Geographic,
    projector: &P,
) -> Result<NormalizedCoordinates> {
    let zone = zone_for_longitude(geo.lon[0]);
    let hemisphere = Hemisphere::for_latitude(geo.lat[0]);
    log::debug!("Derived UTM zone {}{} from first vertex", zone, hemisphere);

    if geo.lon.iter().any(|&lon| zone_for_longitude(lon) != zone) {
        log::warn!(
            "Area source vertices span more than one UTM zone; projecting all in zone {}",
            zone
        );
    }

    let mut x_km = [0.0; VERTEX_COUNT];
    let mut y_km = [0.0; VERTEX_COUNT];
    for i in 0..VERTEX_COUNT {
        let (easting, northing) = projector.forward(geo.lat[i], geo.lon[i], zone, hemisphere)?;
        x_km[i] = easting / METRES_PER_KM;
        y_km[i] = northing / METRES_PER_KM;
    }

    Ok(NormalizedCoordinates {
        lat: geo.lat,
        lon: geo.lon,
        x_km,
        y_km,
        utm_zone: zone,
        utm_hemisphere: hemisphere,
    })
}

fn project_inverse<P: Projector + ?Sized>(
    utm: Projected,
    projector: &P,
) -> Result<NormalizedCoordinates> {
    let mut lat = [0.0; VERTEX_COUNT];
    let mut lon = [0.0; VERTEX_COUNT];
    for i in 0..VERTEX_COUNT {
        let (vertex_lat, vertex_lon) = projector.inverse(
            utm.x_km[i] * METRES_PER_KM,
            utm.y_km[i] * METRES_PER_KM,
            utm.zone,
            utm.hemisphere,
        )?;
        lat[i] = vertex_lat;
        lon[i] = vertex_lon;
    }

    Ok(NormalizedCoordinates {
        lat,
        lon,
        x_km: utm.x_km,
        y_km: utm.y_km,
        utm_zone: utm.zone,
        utm_hemisphere: utm.hemisphere,
    })
}
