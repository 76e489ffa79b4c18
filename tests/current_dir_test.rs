// Changes the process working directory; keep this the only test in its binary.

use area_source::{AreaSource, CoordinateInput, write_area_source};

#[test]
fn test_default_writes_into_current_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let site = dir.path().join("mill_road");
    std::fs::create_dir(&site)?;
    std::env::set_current_dir(&site)?;

    let source = AreaSource::new("yard", "PM10", 1.5, 42.0, 1.0, 0.002, "lb/m2/hr")?;
    let coords = CoordinateInput::geographic(
        vec![52.20, 52.20, 52.21, 52.21],
        vec![0.12, 0.13, 0.13, 0.12],
    );

    let path = write_area_source(&source, &coords)?;
    let path = path.canonicalize()?;
    assert_eq!(path, site.canonicalize()?.join("mill_road--area_sources.txt"));

    write_area_source(&source, &coords)?;
    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content.lines().count(), 3);
    assert!(content.lines().nth(2).unwrap().ends_with(",31,N,1.5,42,1,0.002,lb/m2/hr"));
    Ok(())
}
