#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use docscrub::{convert_directory, probe_converter};

/// Write an executable shell script standing in for soffice.
fn write_fake_soffice(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("fake-soffice.sh");
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Answers the version probe and "converts" by copying the input file to a
/// sibling with a .docx extension, like the real headless invocation does.
const CONVERTING_SOFFICE: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "LibreOffice 7.6 fake"
    exit 0
fi
for last; do :; done
cp "$last" "${last%.*}.docx"
"#;

/// Answers the version probe but fails every conversion.
const FAILING_SOFFICE: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    exit 0
fi
echo "conversion refused" >&2
exit 1
"#;

/// Exits 0 on everything but never writes an output file.
const SILENT_SOFFICE: &str = r#"#!/bin/sh
exit 0
"#;

#[test]
fn converts_doc_files_and_removes_the_originals() {
    let dir = tempfile::tempdir().unwrap();
    let soffice = write_fake_soffice(dir.path(), CONVERTING_SOFFICE);
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("report.doc"), b"legacy bytes").unwrap();

    let summary = convert_directory(&docs, soffice.to_str().unwrap()).unwrap();
    assert_eq!(summary.found, 1);
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.removed, 1);
    assert!(docs.join("report.docx").is_file());
    assert!(!docs.join("report.doc").exists());
}

#[test]
fn failed_conversion_leaves_the_original_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let soffice = write_fake_soffice(dir.path(), FAILING_SOFFICE);
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("report.doc"), b"legacy bytes").unwrap();

    // A per-file failure does not flip the stage result.
    let summary = convert_directory(&docs, soffice.to_str().unwrap()).unwrap();
    assert_eq!(summary.found, 1);
    assert_eq!(summary.converted, 0);
    assert_eq!(summary.removed, 0);
    assert!(docs.join("report.doc").is_file());
    assert!(!docs.join("report.docx").exists());
}

#[test]
fn clean_exit_without_an_output_file_is_not_counted_as_converted() {
    let dir = tempfile::tempdir().unwrap();
    let soffice = write_fake_soffice(dir.path(), SILENT_SOFFICE);
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("report.doc"), b"legacy bytes").unwrap();

    let summary = convert_directory(&docs, soffice.to_str().unwrap()).unwrap();
    assert_eq!(summary.found, 1);
    assert_eq!(summary.converted, 0);
    assert_eq!(summary.removed, 0);
    assert!(docs.join("report.doc").is_file());
}

#[test]
fn unavailable_converter_aborts_before_touching_any_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("report.doc"), b"legacy bytes").unwrap();

    assert!(probe_converter("/nonexistent/soffice").is_err());
    let result = convert_directory(dir.path(), "/nonexistent/soffice");
    assert!(result.is_err());
    assert!(dir.path().join("report.doc").is_file());
}

#[test]
fn directory_without_doc_files_succeeds_trivially() {
    let dir = tempfile::tempdir().unwrap();
    let soffice = write_fake_soffice(dir.path(), CONVERTING_SOFFICE);
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("already.docx"), b"modern").unwrap();

    let summary = convert_directory(&docs, soffice.to_str().unwrap()).unwrap();
    assert_eq!(summary.found, 0);
    assert_eq!(summary.converted, 0);
}
