use crate::config::EmissionUnits;
use crate::error::{AreaSourceError, Result};

/// Identification and physical parameters of one area source
///
/// The footprint coordinates are passed separately as a
/// [`CoordinateInput`](crate::coordinates::CoordinateInput).
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSource {
    /// Emission source identifier
    pub src_name: String,
    /// Emitted species identifier
    pub species_name: String,
    /// Release height in metres above ground level
    pub effective_height: f64,
    /// Base elevation in metres above sea level
    pub base_elev: f64,
    /// Initial vertical plume spread in metres
    pub init_sigma_z: f64,
    /// Emission rate, in `emission_units`
    pub emission_rate: f64,
    pub emission_units: EmissionUnits,
}

impl AreaSource {
    /// Build a source, parsing `emission_units` from its written form.
    ///
    /// # Example
    /// ```
    /// use area_source::AreaSource;
    ///
    /// let source = AreaSource::new("stack1", "NOx", 10.0, 100.0, 2.0, 5.0, "g/m2/s").unwrap();
    /// assert_eq!(source.emission_units.as_str(), "g/m2/s");
    /// assert!(AreaSource::new("stack1", "NOx", 10.0, 100.0, 2.0, 5.0, "g/s").is_err());
    /// ```
    pub fn new(
        src_name: &str,
        species_name: &str,
        effective_height: f64,
        base_elev: f64,
        init_sigma_z: f64,
        emission_rate: f64,
        emission_units: &str,
    ) -> Result<Self> {
        let source = Self {
            src_name: src_name.to_string(),
            species_name: species_name.to_string(),
            effective_height,
            base_elev,
            init_sigma_z,
            emission_rate,
            emission_units: emission_units.parse()?,
        };
        source.validate()?;
        Ok(source)
    }

    /// Check that every field can be written as a single delimited column.
    pub fn validate(&self) -> Result<()> {
        check_name("src_name", &self.src_name)?;
        check_name("species_name", &self.species_name)?;

        for (field, value) in [
            ("effective_height", self.effective_height),
            ("base_elev", self.base_elev),
            ("init_sigma_z", self.init_sigma_z),
            ("emission_rate", self.emission_rate),
        ] {
            if !value.is_finite() {
                return Err(AreaSourceError::NonFinite(field, value));
            }
        }
        Ok(())
    }
}

fn check_name(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AreaSourceError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(c) = value.chars().find(|&c| matches!(c, ',' | '\n' | '\r')) {
        return Err(AreaSourceError::InvalidField {
            field,
            reason: format!("contains delimiter character {:?}", c),
        });
    }
    Ok(())
}
