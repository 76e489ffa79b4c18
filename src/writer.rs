use std::path::PathBuf;

use crate::area_source::AreaSource;
use crate::config::WriterConfig;
use crate::coordinates::{CoordinateInput, normalize};
use crate::error::Result;
use crate::output::{RowFormatter, append_row, ensure_output_file};
use crate::projection::{Projector, UtmProjector};

/// Writes area source rows to the output table
///
/// Each call to [`write`](Self::write) validates the source and its
/// coordinates, derives the missing coordinate representation, creates the
/// output file with its header if needed and appends exactly one row.
/// Nothing is written when validation or projection fails.
///
/// There is no locking; a single writer per output file is assumed.
pub struct AreaSourceWriter<P = UtmProjector> {
    config: WriterConfig,
    projector: P,
    formatter: RowFormatter,
}

impl AreaSourceWriter<UtmProjector> {
    /// Writer using the WGS84 UTM projector.
    pub fn new(config: WriterConfig) -> Self {
        let projector = UtmProjector::new(config.southern_false_northing);
        Self::with_projector(config, projector)
    }
}

impl<P: Projector> AreaSourceWriter<P> {
    pub fn with_projector(config: WriterConfig, projector: P) -> Self {
        let formatter = RowFormatter::new(&config);
        Self {
            config,
            projector,
            formatter,
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Append one area source, returning the path of the output file.
    pub fn write(&self, source: &AreaSource, coords: &CoordinateInput) -> Result<PathBuf> {
        source.validate()?;
        let coords = normalize(coords, &self.projector)?;
        let row = self.formatter.format(source, &coords);

        let directory = match &self.config.directory {
            Some(directory) => directory.clone(),
            None => std::env::current_dir()?,
        };
        let path = ensure_output_file(&directory, &self.config)?;
        append_row(&path, &row)?;

        log::info!(
            "Wrote area source {} ({}) to {}",
            source.src_name,
            source.species_name,
            path.display()
        );
        Ok(path)
    }
}

/// Append one area source to `<cwd name>--area_sources.txt` in the current
/// working directory, projecting with WGS84 UTM.
///
/// # Example
/// ```no_run
/// use area_source::{AreaSource, CoordinateInput, write_area_source};
///
/// let source = AreaSource::new("stack1", "NOx", 10.0, 100.0, 2.0, 5.0, "g/m2/s")?;
/// let coords = CoordinateInput::geographic(
///     vec![45.0, 45.0, 45.1, 45.1],
///     vec![-75.0, -74.9, -74.9, -75.0],
/// );
/// let path = write_area_source(&source, &coords)?;
/// println!("wrote {}", path.display());
/// # Ok::<(), area_source::AreaSourceError>(())
/// ```
pub fn write_area_source(source: &AreaSource, coords: &CoordinateInput) -> Result<PathBuf> {
    AreaSourceWriter::new(WriterConfig::default()).write(source, coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Hemisphere;
    use crate::error::AreaSourceError;

    /// Projector that must never be reached.
    struct UnreachableProjector;

    impl Projector for UnreachableProjector {
        fn forward(&self, _: f64, _: f64, _: u8, _: Hemisphere) -> Result<(f64, f64)> {
            panic!("forward projection called");
        }

        fn inverse(&self, _: f64, _: f64, _: u8, _: Hemisphere) -> Result<(f64, f64)> {
            panic!("inverse projection called");
        }
    }

    fn source() -> AreaSource {
        AreaSource::new("stack1", "NOx", 10.0, 100.0, 2.0, 5.0, "g/m2/s").unwrap()
    }

    #[test]
    fn test_validation_failure_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = AreaSourceWriter::new(WriterConfig::in_directory(dir.path()));

        let coords = CoordinateInput::geographic(vec![45.0; 3], vec![-75.0; 4]);
        let err = writer.write(&source(), &coords).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_projection_failure_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = AreaSourceWriter::new(WriterConfig::in_directory(dir.path()));

        let coords = CoordinateInput::geographic(vec![95.0; 4], vec![-75.0; 4]);
        let err = writer.write(&source(), &coords).unwrap_err();
        assert!(matches!(err, AreaSourceError::Projection(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_pass_through_skips_projector() {
        let dir = tempfile::tempdir().unwrap();
        let config = WriterConfig::in_directory(dir.path());
        let writer = AreaSourceWriter::with_projector(config, UnreachableProjector);

        let coords = CoordinateInput::geographic(vec![1.0; 4], vec![2.0; 4]).with_projected(
            vec![3.0; 4],
            vec![4.0; 4],
            7,
            "S",
        );
        let path = writer.write(&source(), &coords).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.contains(",7,S,"));
    }
}
