//! Invocation planning for archive creation and splitting.
//!
//! Planning is a pure-ish phase separated from execution: it validates the
//! request, lays out the output directories, decides whether the payload
//! must be split into parts, and produces the exact token sequence to hand
//! to the external tool. Nothing in this module spawns a process.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::ArchiverConfig;
use crate::probe::{self, MIB};
use crate::{Error, Result};

/// A request to package a file or directory into a (possibly multi-part)
/// zip archive.
///
/// # Example
///
/// ```rust,no_run
/// use partzip::ArchiveRequest;
///
/// let request = ArchiveRequest::new("/data/upload")
///     .output_dir("/data/out")
///     .max_part_bytes(2_000_000_000)
///     .compression_level(5);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    source_path: PathBuf,
    output_dir: Option<PathBuf>,
    max_part_bytes: Option<u64>,
    compression_level: u32,
    split_enabled: bool,
}

impl ArchiveRequest {
    /// Creates a request for `source_path` with store-only compression,
    /// splitting enabled, and defaults for everything else.
    pub fn new(source_path: impl AsRef<Path>) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            output_dir: None,
            max_part_bytes: None,
            compression_level: 0,
            split_enabled: true,
        }
    }

    /// Sets an explicit output directory instead of the synthesized sibling.
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the maximum size of each emitted part, in bytes.
    ///
    /// When unset, the configured default part size applies.
    pub fn max_part_bytes(mut self, bytes: u64) -> Self {
        self.max_part_bytes = Some(bytes);
        self
    }

    /// Sets the compression level, clamped to the tool's `0..=9` range.
    pub fn compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    /// Enables or disables splitting for [`plan_create`].
    ///
    /// Compression level and splitting are orthogonal; the level is always
    /// honored regardless of this flag.
    pub fn split(mut self, enabled: bool) -> Self {
        self.split_enabled = enabled;
        self
    }

    /// The path to be archived.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// An immutable, fully resolved invocation plan.
///
/// Built once per request and owned by the call that created it; execution
/// consumes it without further decisions.
#[derive(Debug, Clone)]
pub struct ArchivePlan {
    invocation: Vec<String>,
    working_output_dir: PathBuf,
    is_split: bool,
}

impl ArchivePlan {
    /// The ordered command tokens, program first.
    pub fn invocation(&self) -> &[String] {
        &self.invocation
    }

    /// The directory the archive parts will land in.
    pub fn working_output_dir(&self) -> &Path {
        &self.working_output_dir
    }

    /// Whether the invocation requests multi-part output.
    pub fn is_split(&self) -> bool {
        self.is_split
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, PathBuf) {
        (self.invocation, self.working_output_dir)
    }
}

/// Computes the part size in MiB for a request.
///
/// With no explicit limit the configured default applies as-is. An explicit
/// byte limit is floored to whole MiB and reduced by the configured margin,
/// because the tool's `-v` flag counts in units coarser than bytes and a
/// part rounded up past the caller's hard cap would be worse than a
/// slightly small one. The result never goes below 1 MiB.
pub fn part_size_mib(max_part_bytes: Option<u64>, config: &ArchiverConfig) -> u64 {
    match max_part_bytes {
        None => config.default_part_mib,
        Some(bytes) => (bytes / MIB).saturating_sub(config.part_margin_mib).max(1),
    }
}

/// Returns a collision-checked child path of `parent` with a unique name.
///
/// The base name is derived from the current time (separator-free digits);
/// if that name is already taken a counter suffix is probed until a free
/// name is found. The path is not created here.
fn unique_child(parent: &Path) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut candidate = parent.join(stamp.to_string());
    let mut counter = 1u32;
    while candidate.exists() {
        candidate = parent.join(format!("{stamp}-{counter}"));
        counter += 1;
    }
    candidate
}

/// Creates a uniquely named directory under `parent` and returns its path.
pub(crate) fn create_unique_dir(parent: &Path) -> Result<PathBuf> {
    let dir = unique_child(parent);
    fs::create_dir(&dir)?;
    Ok(dir)
}

/// Base name of the source, used for both the nested directory and the
/// archive file name.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "archive".to_string())
}

/// Resolves the output base directory for a request: the explicit directory
/// in absolute form, or a unique sibling of the source.
fn resolve_output_base(request: &ArchiveRequest) -> Result<PathBuf> {
    match &request.output_dir {
        Some(dir) => Ok(std::path::absolute(dir)?),
        None => {
            let parent = request.source_path.parent().unwrap_or(Path::new("."));
            Ok(unique_child(parent))
        }
    }
}

fn creation_tokens(
    config: &ArchiverConfig,
    level: u32,
    archive_file: &Path,
    source: &Path,
    part_mib: Option<u64>,
) -> Vec<String> {
    let mut tokens = vec![
        config.archiver_bin.clone(),
        "a".to_string(),
        "-tzip".to_string(),
        format!("-mx={level}"),
        archive_file.to_string_lossy().to_string(),
        source.to_string_lossy().to_string(),
    ];
    if let Some(mib) = part_mib {
        tokens.push(format!("-v{mib}m"));
    }
    tokens
}

/// Plans whole-path archiving of a file or directory.
///
/// The output layout is `<base>/<name>/<name>.zip`, where `<base>` is the
/// request's output directory or a unique sibling of the source. Splitting
/// is applied only when the request allows it *and* the measured payload
/// exceeds the part size.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the source does not exist; nothing
/// is created on disk in that case. Filesystem and probe failures propagate.
pub fn plan_create(request: &ArchiveRequest, config: &ArchiverConfig) -> Result<ArchivePlan> {
    let source = &request.source_path;
    if !source.exists() {
        return Err(Error::InvalidInput { path: source.clone() });
    }

    let name = source_name(source);
    let base = resolve_output_base(request)?;
    let work_dir = base.join(&name);
    fs::create_dir_all(&work_dir)?;

    let limit_mib = part_size_mib(request.max_part_bytes, config);
    let is_split = request.split_enabled && probe::tree_size(source)? > limit_mib * MIB;

    let archive_file = work_dir.join(format!("{name}.zip"));
    let invocation = creation_tokens(
        config,
        request.compression_level,
        &archive_file,
        source,
        is_split.then_some(limit_mib),
    );

    Ok(ArchivePlan {
        invocation,
        working_output_dir: work_dir,
        is_split,
    })
}

/// Plans splitting of a single existing file into bounded-size zip parts.
///
/// Unlike [`plan_create`] this mode is unconditionally multi-part and does
/// not nest a name directory: parts land directly in the output base.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the source is missing or is not a
/// regular file.
pub fn plan_split(request: &ArchiveRequest, config: &ArchiverConfig) -> Result<ArchivePlan> {
    let source = &request.source_path;
    if !source.is_file() {
        return Err(Error::InvalidInput { path: source.clone() });
    }

    let name = source_name(source);
    let base = resolve_output_base(request)?;
    fs::create_dir_all(&base)?;

    let limit_mib = part_size_mib(request.max_part_bytes, config);
    let archive_file = base.join(format!("{name}.zip"));
    let invocation = creation_tokens(
        config,
        request.compression_level,
        &archive_file,
        source,
        Some(limit_mib),
    );

    Ok(ArchivePlan {
        invocation,
        working_output_dir: base,
        is_split: true,
    })
}
