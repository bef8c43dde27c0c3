//! End-to-end tests against the real external tools.
//!
//! Every test in this file is skipped (with a note on stderr) when the
//! `7z` or `tar` binaries are not installed, so the suite stays green on
//! minimal hosts.

use std::fs;
use std::path::Path;

use partzip::probe::MIB;
use partzip::{
    ArchiveOutcome, ArchiveRequest, Archiver, ArchiverConfig, ExtractionRequest, command,
};

fn tooled_archiver(working_root: &Path) -> Option<Archiver> {
    let archiver = Archiver::with_config(ArchiverConfig::new().working_root(working_root));
    if archiver.tools_available() {
        Some(archiver)
    } else {
        eprintln!("skipping: 7z/tar not installed");
        None
    }
}

fn success_dir(outcome: &ArchiveOutcome) -> &Path {
    outcome
        .output_dir()
        .unwrap_or_else(|| panic!("expected success, got {outcome:?}"))
}

#[tokio::test]
async fn create_then_extract_reproduces_content() {
    let dir = tempfile::tempdir().unwrap();
    let Some(archiver) = tooled_archiver(&dir.path().join("work")) else {
        return;
    };

    let payload = b"roundtrip payload, byte for byte";
    let source = dir.path().join("hello.txt");
    fs::write(&source, payload).unwrap();

    let created = archiver
        .create(ArchiveRequest::new(&source).output_dir(dir.path().join("out")))
        .await
        .unwrap();
    let archive = success_dir(&created).join("hello.txt.zip");
    assert!(archive.is_file());

    let extracted = archiver
        .extract(ExtractionRequest::new(&archive))
        .await
        .unwrap();
    let restored = success_dir(&extracted).join("hello.txt");
    assert_eq!(fs::read(&restored).unwrap(), payload);
}

#[tokio::test]
async fn create_from_directory_archives_the_tree() {
    let dir = tempfile::tempdir().unwrap();
    let Some(archiver) = tooled_archiver(&dir.path().join("work")) else {
        return;
    };

    let source = dir.path().join("tree");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("one.txt"), b"one").unwrap();
    fs::write(source.join("two.txt"), b"two").unwrap();

    let created = archiver
        .create(ArchiveRequest::new(&source).output_dir(dir.path().join("out")))
        .await
        .unwrap();

    let work_dir = success_dir(&created);
    assert!(work_dir.join("tree.zip").is_file());
}

#[tokio::test]
async fn split_emits_multiple_bounded_parts() {
    let dir = tempfile::tempdir().unwrap();
    let Some(archiver) = tooled_archiver(&dir.path().join("work")) else {
        return;
    };

    let source = dir.path().join("big.bin");
    fs::write(&source, vec![0x5Au8; 3 * MIB as usize]).unwrap();

    // 12 MiB cap minus the 10 MiB margin caps each part at 2 MiB.
    let outcome = archiver
        .split(
            ArchiveRequest::new(&source)
                .output_dir(dir.path().join("parts"))
                .max_part_bytes(12 * MIB),
        )
        .await
        .unwrap();

    let parts_dir = success_dir(&outcome);
    let parts: Vec<String> = fs::read_dir(parts_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|n| n.starts_with("big.bin.zip."))
        .collect();
    assert!(parts.len() >= 2, "expected multiple parts, got {parts:?}");
}

#[tokio::test]
async fn tar_archive_extracts_via_tar() {
    let dir = tempfile::tempdir().unwrap();
    let Some(archiver) = tooled_archiver(&dir.path().join("work")) else {
        return;
    };

    let srcdir = dir.path().join("src");
    fs::create_dir(&srcdir).unwrap();
    fs::write(srcdir.join("note.txt"), b"tar family").unwrap();

    let archive = dir.path().join("notes.tar");
    let output = command::run(vec![
        "tar".to_string(),
        "-cf".to_string(),
        archive.to_string_lossy().to_string(),
        "-C".to_string(),
        srcdir.to_string_lossy().to_string(),
        "note.txt".to_string(),
    ])
    .await
    .unwrap();
    assert_eq!(output.code, 0, "tar -cf failed: {}", output.stderr);

    let extracted = archiver
        .extract(ExtractionRequest::new(&archive))
        .await
        .unwrap();
    let restored = success_dir(&extracted).join("note.txt");
    assert_eq!(fs::read(&restored).unwrap(), b"tar family");
}

#[tokio::test]
async fn wrong_password_is_not_success() {
    let dir = tempfile::tempdir().unwrap();
    let Some(archiver) = tooled_archiver(&dir.path().join("work")) else {
        return;
    };

    let source = dir.path().join("secret.txt");
    fs::write(&source, b"classified").unwrap();

    let archive = dir.path().join("secret.zip");
    let output = command::run(vec![
        "7z".to_string(),
        "a".to_string(),
        "-tzip".to_string(),
        "-psecret".to_string(),
        archive.to_string_lossy().to_string(),
        source.to_string_lossy().to_string(),
    ])
    .await
    .unwrap();
    assert_eq!(output.code, 0, "7z a failed: {}", output.stderr);

    let outcome = archiver
        .extract(ExtractionRequest::new(&archive).password("not-the-password"))
        .await
        .unwrap();

    // The exact stderr wording varies across tool versions; either way the
    // extraction must not be reported as a success.
    assert!(
        matches!(
            outcome,
            ArchiveOutcome::WrongPassword | ArchiveOutcome::ToolError { .. }
        ),
        "got {outcome:?}"
    );
}
