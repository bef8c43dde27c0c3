//! Integration tests for the extraction outcome short-circuits.
//!
//! Everything here must resolve without invoking any external tool, so
//! these tests run on hosts without 7z or tar installed.

use std::fs;

use partzip::{ArchiveOutcome, Archiver, ArchiverConfig, ExtractionRequest};

fn archiver_with_root(root: &std::path::Path) -> Archiver {
    Archiver::with_config(ArchiverConfig::new().working_root(root))
}

#[tokio::test]
async fn missing_archive_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("work");
    let archiver = archiver_with_root(&root);

    let outcome = archiver
        .extract(ExtractionRequest::new(dir.path().join("gone.zip")))
        .await
        .unwrap();

    assert_eq!(outcome, ArchiveOutcome::Fatal);
    assert!(!root.exists());
}

#[tokio::test]
async fn directory_input_is_not_extractable() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("work");
    let archiver = archiver_with_root(&root);

    let input = dir.path().join("a-directory.zip");
    fs::create_dir(&input).unwrap();

    let outcome = archiver
        .extract(ExtractionRequest::new(&input))
        .await
        .unwrap();

    assert_eq!(outcome, ArchiveOutcome::NotExtractable);
    assert!(!root.exists());
}

#[tokio::test]
async fn unsupported_extension_invokes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("work");
    let archiver = archiver_with_root(&root);

    let input = dir.path().join("payload.xyz");
    fs::write(&input, b"not an archive").unwrap();

    let outcome = archiver
        .extract(ExtractionRequest::new(&input))
        .await
        .unwrap();

    assert_eq!(outcome, ArchiveOutcome::UnsupportedFormat);
    // No extraction directory may appear for an ignored request.
    assert!(!root.exists());
}

#[tokio::test]
async fn supported_extension_creates_session_under_working_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("work");

    // A nonsense binary name makes the spawn fail after the directories are
    // laid out, which is exactly what this test wants to observe.
    let archiver = Archiver::with_config(
        ArchiverConfig::new()
            .working_root(&root)
            .archiver_bin("partzip-test-no-such-binary"),
    );

    let input = dir.path().join("data.zip");
    fs::write(&input, b"pretend zip").unwrap();

    let result = archiver.extract(ExtractionRequest::new(&input)).await;
    assert!(result.is_err());

    // The session directory and the nested name directory were laid out
    // before the spawn was attempted.
    let sessions: Vec<_> = fs::read_dir(&root).unwrap().collect();
    assert_eq!(sessions.len(), 1);
    let session = sessions[0].as_ref().unwrap().path();
    assert!(session.join("data.zip").is_dir());
}
