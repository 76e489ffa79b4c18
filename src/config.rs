//! Configuration for area source output.
//!
//! ## Loading from TOML
//!
//! Every field is optional; missing keys take the defaults from
//! `WriterConfig::default()`:
//!
//! ```
//! use area_source::config::WriterConfig;
//!
//! let config = WriterConfig::from_toml_str(
//!     r#"
//!     directory = "/tmp/site_a"
//!     km_decimals = 4
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.km_decimals, 4);
//! assert_eq!(config.degree_decimals, 6);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::DEFAULT_FILE_SUFFIX;
use crate::error::{AreaSourceError, Result};

/// UTM hemisphere
///
/// # Parsing formats
/// - `N` - northern hemisphere
/// - `S` - southern hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere of a latitude; the equator counts as north.
    pub fn for_latitude(lat_deg: f64) -> Self {
        if lat_deg >= 0.0 {
            Self::North
        } else {
            Self::South
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = AreaSourceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            _ => Err(AreaSourceError::InvalidHemisphere(s.to_string())),
        }
    }
}

/// Emission rate units accepted by the dispersion model for area sources
///
/// The string forms are written verbatim into the `emission_units` column.
///
/// # Example
/// ```
/// use area_source::config::EmissionUnits;
///
/// let units: EmissionUnits = "kg/m2/hr".parse().unwrap();
/// assert_eq!(units, EmissionUnits::KgPerM2PerHr);
/// assert!("g/m3/s".parse::<EmissionUnits>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionUnits {
    GPerM2PerS,
    KgPerM2PerHr,
    LbPerM2PerHr,
    TonsPerM2PerYr,
    OdourUnitMPerS,
    OdourUnitMPerMin,
    MetricTonsPerM2PerYr,
    BqPerM2PerS,
    GBqPerM2PerYr,
}

impl EmissionUnits {
    pub const ALL: [EmissionUnits; 9] = [
        Self::GPerM2PerS,
        Self::KgPerM2PerHr,
        Self::LbPerM2PerHr,
        Self::TonsPerM2PerYr,
        Self::OdourUnitMPerS,
        Self::OdourUnitMPerMin,
        Self::MetricTonsPerM2PerYr,
        Self::BqPerM2PerS,
        Self::GBqPerM2PerYr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GPerM2PerS => "g/m2/s",
            Self::KgPerM2PerHr => "kg/m2/hr",
            Self::LbPerM2PerHr => "lb/m2/hr",
            Self::TonsPerM2PerYr => "tons/m2/yr",
            Self::OdourUnitMPerS => "Odour Unit * m/s",
            Self::OdourUnitMPerMin => "Odour Unit * m/min",
            Self::MetricTonsPerM2PerYr => "metric tons/m2/yr",
            Self::BqPerM2PerS => "Bq/m2/s",
            Self::GBqPerM2PerYr => "GBq/m2/yr",
        }
    }
}

impl fmt::Display for EmissionUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmissionUnits {
    type Err = AreaSourceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s_trim = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|units| units.as_str() == s_trim)
            .ok_or_else(|| AreaSourceError::UnknownEmissionUnits(s.to_string()))
    }
}

/// Output configuration for the area source writer
///
/// Use `WriterConfig::default()` to write into the current working
/// directory with the standard file name and precision.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Directory holding the output file (`None` = current working directory)
    pub directory: Option<PathBuf>,
    /// Full output file name, replacing `<directory name><file_suffix>`
    pub file_name: Option<String>,
    /// Suffix appended to the directory name to form the file name
    pub file_suffix: String,
    /// Digits after the decimal point for latitude/longitude columns
    pub degree_decimals: usize,
    /// Digits after the decimal point for UTM kilometre columns
    pub km_decimals: usize,
    /// Offset southern hemisphere northings by 10 000 000 m (standard UTM).
    /// When false, southern northings are negative and the hemisphere has
    /// no effect on the transform.
    pub southern_false_northing: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: None,
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            degree_decimals: 6,
            km_decimals: 3,
            southern_false_northing: true,
        }
    }
}

impl WriterConfig {
    /// Configuration writing into `directory` with default naming.
    pub fn in_directory<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: Some(directory.into()),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AreaSourceError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AreaSourceError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_parse() {
        assert_eq!("N".parse::<Hemisphere>().unwrap(), Hemisphere::North);
        assert_eq!(" S ".parse::<Hemisphere>().unwrap(), Hemisphere::South);
        assert!("E".parse::<Hemisphere>().is_err());
        assert!("north".parse::<Hemisphere>().is_err());
        assert!("".parse::<Hemisphere>().is_err());
    }

    #[test]
    fn test_hemisphere_for_latitude() {
        assert_eq!(Hemisphere::for_latitude(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::for_latitude(45.0), Hemisphere::North);
        assert_eq!(Hemisphere::for_latitude(-0.0001), Hemisphere::South);
        assert_eq!(Hemisphere::for_latitude(-33.9), Hemisphere::South);
    }

    #[test]
    fn test_emission_units_all_strings_parse() {
        for units in EmissionUnits::ALL {
            let parsed: EmissionUnits = units.as_str().parse().unwrap();
            assert_eq!(parsed, units);
            assert_eq!(parsed.to_string(), units.as_str());
        }
    }

    #[test]
    fn test_emission_units_invalid() {
        assert!("g/m2/hr".parse::<EmissionUnits>().is_err());
        assert!("G/M2/S".parse::<EmissionUnits>().is_err());
        assert!("Odour Unit*m/s".parse::<EmissionUnits>().is_err());

        let err = "ppm".parse::<EmissionUnits>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_writer_config_defaults() {
        let config = WriterConfig::default();
        assert!(config.directory.is_none());
        assert!(config.file_name.is_none());
        assert_eq!(config.file_suffix, "--area_sources.txt");
        assert_eq!(config.degree_decimals, 6);
        assert_eq!(config.km_decimals, 3);
        assert!(config.southern_false_northing);
    }

    #[test]
    fn test_writer_config_from_toml() {
        let config = WriterConfig::from_toml_str(
            r#"
            file_name = "site.txt"
            southern_false_northing = false
            "#,
        )
        .unwrap();
        assert_eq!(config.file_name.as_deref(), Some("site.txt"));
        assert!(!config.southern_false_northing);
        assert_eq!(config.file_suffix, "--area_sources.txt");
    }

    #[test]
    fn test_writer_config_rejects_unknown_keys() {
        let err = WriterConfig::from_toml_str("precision = 3").unwrap_err();
        assert!(matches!(err, AreaSourceError::Config(_)));
    }
}
