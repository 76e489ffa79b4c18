use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaSourceError {
    #[error("Expected {expected} {field} values, got {actual}")]
    CoordinateLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("No coordinates supplied: need lat/lon or x_km/y_km with UTM zone and hemisphere")]
    MissingCoordinates,

    #[error("Incomplete {0} coordinates: missing {1}")]
    IncompleteCoordinates(&'static str, &'static str),

    #[error("Unknown emission units: {0:?}")]
    UnknownEmissionUnits(String),

    #[error("Invalid UTM hemisphere {0:?}: expected N or S")]
    InvalidHemisphere(String),

    #[error("Invalid UTM zone {0}: expected 1-60")]
    InvalidZone(i64),

    #[error("{0} must be finite, got {1}")]
    NonFinite(&'static str, f64),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Projection failed: {0}")]
    Projection(String),

    #[error("Output file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AreaSourceError {
    /// True for caller mistakes that were rejected before anything was written.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Projection(_) | Self::Io(_) | Self::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, AreaSourceError>;
