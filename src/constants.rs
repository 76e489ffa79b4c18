//! Geodetic and file-format constants
//!
//! WGS84 ellipsoid parameters and the UTM grid definition used by the
//! projector, plus the fixed shape of the area source table.

/// WGS84 semi-major axis in metres.
pub const WGS84_SEMI_MAJOR_M: f64 = 6_378_137.0;

/// WGS84 inverse flattening.
pub const WGS84_INVERSE_FLATTENING: f64 = 298.257_223_563;

/// UTM scale factor on the central meridian.
pub const UTM_SCALE_FACTOR: f64 = 0.9996;

/// UTM false easting in metres.
pub const UTM_FALSE_EASTING_M: f64 = 500_000.0;

/// False northing applied to southern hemisphere zones, in metres.
pub const UTM_SOUTH_FALSE_NORTHING_M: f64 = 10_000_000.0;

/// Number of UTM zones.
pub const UTM_ZONE_COUNT: u8 = 60;

/// Width of a UTM zone in degrees of longitude.
pub const UTM_ZONE_WIDTH_DEG: f64 = 6.0;

/// Corners of an area source quadrilateral.
pub const VERTEX_COUNT: usize = 4;

pub const METRES_PER_KM: f64 = 1000.0;

/// Appended to the directory name to form the default output file name.
pub const DEFAULT_FILE_SUFFIX: &str = "--area_sources.txt";
