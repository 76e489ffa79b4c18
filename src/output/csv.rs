use crate::area_source::AreaSource;
use crate::config::WriterConfig;
use crate::coordinates::NormalizedCoordinates;

/// Column names of the area source table, in write order.
pub const HEADER_COLUMNS: [&str; 25] = [
    "src_name",
    "species_name",
    "lat_dec_deg_1",
    "lon_dec_deg_1",
    "lat_dec_deg_2",
    "lon_dec_deg_2",
    "lat_dec_deg_3",
    "lon_dec_deg_3",
    "lat_dec_deg_4",
    "lon_dec_deg_4",
    "x_coord_km_1",
    "y_coord_km_1",
    "x_coord_km_2",
    "y_coord_km_2",
    "x_coord_km_3",
    "y_coord_km_3",
    "x_coord_km_4",
    "y_coord_km_4",
    "UTM_zone",
    "UTM_hemisphere",
    "effective_height",
    "base_elev",
    "init_sigma_z",
    "emission_rate",
    "emission_units",
];

pub const DELIMITER: &str = ",";

/// Header line including the trailing newline.
pub fn header_line() -> String {
    format!("{}\n", HEADER_COLUMNS.join(DELIMITER))
}

/// Formats one area source as a table row
pub struct RowFormatter {
    degree_decimals: usize,
    km_decimals: usize,
}

impl RowFormatter {
    pub fn new(config: &WriterConfig) -> Self {
        Self {
            degree_decimals: config.degree_decimals,
            km_decimals: config.km_decimals,
        }
    }

    /// Complete row including the trailing newline.
    pub fn format(&self, source: &AreaSource, coords: &NormalizedCoordinates) -> String {
        let mut fields: Vec<String> = Vec::with_capacity(HEADER_COLUMNS.len());
        fields.push(source.src_name.clone());
        fields.push(source.species_name.clone());

        for (lat, lon) in coords.lat.iter().zip(&coords.lon) {
            fields.push(format!("{:.*}", self.degree_decimals, lat));
            fields.push(format!("{:.*}", self.degree_decimals, lon));
        }
        for (x, y) in coords.x_km.iter().zip(&coords.y_km) {
            fields.push(format!("{:.*}", self.km_decimals, x));
            fields.push(format!("{:.*}", self.km_decimals, y));
        }

        fields.push(coords.utm_zone.to_string());
        fields.push(coords.utm_hemisphere.to_string());
        fields.push(source.effective_height.to_string());
        fields.push(source.base_elev.to_string());
        fields.push(source.init_sigma_z.to_string());
        fields.push(source.emission_rate.to_string());
        fields.push(source.emission_units.to_string());

        debug_assert_eq!(fields.len(), HEADER_COLUMNS.len());
        let mut line = fields.join(DELIMITER);
        line.push('\n');
        line
    }
}
