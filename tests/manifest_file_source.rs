use std::fs;
use std::io::Write;

use sectionnorm::{FileManifestSource, ManifestIndex, ManifestSource, Normalizer, NormalizerError};

fn write_manifest(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create manifest file");
    file.write_all(contents.as_bytes()).expect("write manifest");
    path
}

#[test]
fn file_manifest_round_trips_section_and_row_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(
        &dir,
        "manifest.csv",
        "10,100 Main,1,a\n11,100 Mezz,2,a\n42,300 Terrace\n",
    );

    let source = FileManifestSource::new("venue_file", path);
    let normalizer = Normalizer::new(ManifestIndex::load(&source).unwrap());

    let main = normalizer.normalize(Some("100 Main"), Some("A"));
    assert_eq!((main.section_id, main.row_id, main.valid), (Some(10), Some(1), true));

    let terrace = normalizer.normalize(Some("300"), None);
    assert_eq!((terrace.section_id, terrace.row_id, terrace.valid), (Some(42), None, true));
}

#[test]
fn missing_manifest_file_is_a_fatal_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileManifestSource::new("venue_file", dir.path().join("nope.csv"));
    let err = ManifestIndex::load(&source).unwrap_err();
    match err {
        NormalizerError::ManifestUnavailable { path, .. } => {
            assert!(path.ends_with("nope.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_line_aborts_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, "manifest.csv", "10,100 Main,1,a\n11,100 Mezz,2\n");
    let source = FileManifestSource::new("venue_file", path);
    let err = ManifestIndex::load(&source).unwrap_err();
    assert!(matches!(
        err,
        NormalizerError::MalformedRow {
            ordinal: 1,
            field_count: 3
        }
    ));
}

#[test]
fn embedded_delimiters_split_anyway() {
    // The format has no quoting: a comma inside a field value produces extra
    // fields, which the loader then rejects as malformed.
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, "manifest.csv", "10,\"Main, Floor\",1,a\n");
    let source = FileManifestSource::new("venue_file", path);
    assert_eq!(source.rows().unwrap()[0].fields.len(), 5);
    assert!(matches!(
        ManifestIndex::load(&source).unwrap_err(),
        NormalizerError::MalformedRow {
            ordinal: 0,
            field_count: 5
        }
    ));
}
