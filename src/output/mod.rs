mod csv;

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::WriterConfig;
use crate::error::{AreaSourceError, Result};

pub use self::csv::{DELIMITER, HEADER_COLUMNS, RowFormatter, header_line};

/// Output file path for `directory`.
///
/// Uses `config.file_name` when set, otherwise the last path segment of
/// `directory` followed by `config.file_suffix`.
pub fn output_path(directory: &Path, config: &WriterConfig) -> Result<PathBuf> {
    if let Some(name) = &config.file_name {
        return Ok(directory.join(name));
    }

    let segment = match directory.file_name() {
        Some(segment) => segment.to_os_string(),
        // "." or "..": name the file after the resolved directory
        None => std::fs::canonicalize(directory)?
            .file_name()
            .map(|s| s.to_os_string())
            .ok_or_else(|| {
                AreaSourceError::Config(format!(
                    "{} has no final path segment to name the output file",
                    directory.display()
                ))
            })?,
    };

    let mut file_name = segment;
    file_name.push(&config.file_suffix);
    Ok(directory.join(file_name))
}

/// Make sure the output file for `directory` exists, creating it with the
/// header line if absent. An existing file is left untouched.
pub fn ensure_output_file(directory: &Path, config: &WriterConfig) -> Result<PathBuf> {
    let path = output_path(directory, config)?;

    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(mut file) => {
            file.write_all(header_line().as_bytes())?;
            log::info!("Created area source file {}", path.display());
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            log::debug!("Appending to existing {}", path.display());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(path)
}

/// Append one preformatted row with a single write.
pub fn append_row(path: &Path, row: &str) -> Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(row.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_from_directory_name() {
        let path = output_path(Path::new("/data/site_a"), &WriterConfig::default()).unwrap();
        assert_eq!(path, Path::new("/data/site_a/site_a--area_sources.txt"));
    }

    #[test]
    fn test_output_path_overrides() {
        let config = WriterConfig {
            file_suffix: "_areas.csv".to_string(),
            ..WriterConfig::default()
        };
        let path = output_path(Path::new("/data/site_a"), &config).unwrap();
        assert_eq!(path, Path::new("/data/site_a/site_a_areas.csv"));

        let config = WriterConfig {
            file_name: Some("sources.txt".to_string()),
            ..WriterConfig::default()
        };
        let path = output_path(Path::new("/data/site_a"), &config).unwrap();
        assert_eq!(path, Path::new("/data/site_a/sources.txt"));
    }

    #[test]
    fn test_ensure_creates_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = WriterConfig::default();

        let path = ensure_output_file(dir.path(), &config).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, header_line());

        let again = ensure_output_file(dir.path(), &config).unwrap();
        assert_eq!(again, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_existing_header_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let config = WriterConfig::default();
        let path = output_path(dir.path(), &config).unwrap();
        std::fs::write(&path, "old,schema\n").unwrap();

        ensure_output_file(dir.path(), &config).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old,schema\n");
    }

    #[test]
    fn test_append_row_keeps_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = ensure_output_file(dir.path(), &WriterConfig::default()).unwrap();

        append_row(&path, "a\n").unwrap();
        append_row(&path, "b\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}a\nb\n", header_line()));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = ensure_output_file(&missing, &WriterConfig::default()).unwrap_err();
        assert!(matches!(err, AreaSourceError::Io(_)));
        assert!(!err.is_validation());
    }
}
