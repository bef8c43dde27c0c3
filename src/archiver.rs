//! Archive execution: running planned invocations and classifying results.

use std::fs;
use std::path::{Path, PathBuf};

use crate::command::{self, CommandOutput};
use crate::config::ArchiverConfig;
use crate::format::ArchiveFormat;
use crate::outcome::ArchiveOutcome;
use crate::plan::{self, ArchivePlan, ArchiveRequest};
use crate::Result;

/// Case-sensitive marker the archiver prints on stderr for a bad password.
const WRONG_PASSWORD_MARKER: &str = "Wrong password";

/// A request to extract an existing archive.
///
/// # Example
///
/// ```rust,no_run
/// use partzip::ExtractionRequest;
///
/// let request = ExtractionRequest::new("backup.7z").password("hunter2");
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    archive_path: PathBuf,
    password: Option<String>,
}

impl ExtractionRequest {
    /// Creates a request for `archive_path` with no password.
    pub fn new(archive_path: impl AsRef<Path>) -> Self {
        Self {
            archive_path: archive_path.as_ref().to_path_buf(),
            password: None,
        }
    }

    /// Sets the password handed to the archiver.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// The archive to extract.
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }
}

/// Orchestrates the external tools for creating, splitting, and extracting
/// archives.
///
/// An `Archiver` is cheap to construct and holds no state beyond its
/// configuration; operations are independent and may be issued concurrently.
/// It performs no de-duplication, queuing, or retries of its own, and the
/// only await point of each operation is the external process itself.
///
/// # Example
///
/// ```rust,no_run
/// use partzip::{ArchiveRequest, Archiver};
///
/// # async fn demo() -> partzip::Result<()> {
/// let archiver = Archiver::new();
/// let outcome = archiver.create(ArchiveRequest::new("/data/upload")).await?;
/// if let Some(dir) = outcome.output_dir() {
///     println!("archive written to {}", dir.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Archiver {
    config: ArchiverConfig,
}

impl Archiver {
    /// Creates an archiver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an archiver with an explicit configuration.
    pub fn with_config(config: ArchiverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ArchiverConfig {
        &self.config
    }

    /// Returns `true` when both configured external binaries are on `PATH`.
    ///
    /// Useful for callers (and tests) that want to degrade gracefully on
    /// hosts without the tools installed.
    pub fn tools_available(&self) -> bool {
        which::which(&self.config.archiver_bin).is_ok()
            && which::which(&self.config.tar_bin).is_ok()
    }

    /// Packages a file or directory into a zip archive, splitting into
    /// bounded-size parts when the request allows it and the payload is
    /// large enough.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when the
    /// source does not exist. Tool diagnostics are reported through the
    /// outcome, not as errors.
    pub async fn create(&self, request: ArchiveRequest) -> Result<ArchiveOutcome> {
        let plan = plan::plan_create(&request, &self.config)?;
        self.run_plan(plan).await
    }

    /// Splits a single existing file into bounded-size zip parts.
    ///
    /// Splitting in this mode is unconditional; every invocation requests
    /// multi-part output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when the
    /// source is missing or is a directory.
    pub async fn split(&self, request: ArchiveRequest) -> Result<ArchiveOutcome> {
        let plan = plan::plan_split(&request, &self.config)?;
        self.run_plan(plan).await
    }

    async fn run_plan(&self, plan: ArchivePlan) -> Result<ArchiveOutcome> {
        log::info!("creating archive in {}", plan.working_output_dir().display());
        let (invocation, output_dir) = plan.into_parts();
        let output = command::run(invocation).await?;
        Ok(classify_creation(output, output_dir))
    }

    /// Extracts an archive into a fresh directory under the configured
    /// working root.
    ///
    /// The outcome distinguishes a missing input ([`Fatal`]), a directory
    /// input ([`NotExtractable`]), an unsupported extension
    /// ([`UnsupportedFormat`], reported without touching the filesystem or
    /// invoking any tool), a wrong password, tool diagnostics, and success.
    ///
    /// [`Fatal`]: ArchiveOutcome::Fatal
    /// [`NotExtractable`]: ArchiveOutcome::NotExtractable
    /// [`UnsupportedFormat`]: ArchiveOutcome::UnsupportedFormat
    pub async fn extract(&self, request: ExtractionRequest) -> Result<ArchiveOutcome> {
        let archive = &request.archive_path;
        if !archive.exists() {
            return Ok(ArchiveOutcome::Fatal);
        }
        if archive.is_dir() {
            return Ok(ArchiveOutcome::NotExtractable);
        }
        let Some(format) = ArchiveFormat::from_path(archive) else {
            return Ok(ArchiveOutcome::UnsupportedFormat);
        };

        fs::create_dir_all(&self.config.working_root)?;
        let session = plan::create_unique_dir(&self.config.working_root)?;
        let dest = session.join(
            archive
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "archive".to_string()),
        );
        fs::create_dir_all(&dest)?;

        let invocation = self.extraction_tokens(format, archive, &dest, &request);
        log::info!("extracting {} into {}", archive.display(), dest.display());
        let output = command::run(invocation).await?;
        Ok(classify_extraction(output, dest))
    }

    fn extraction_tokens(
        &self,
        format: ArchiveFormat,
        archive: &Path,
        dest: &Path,
        request: &ExtractionRequest,
    ) -> Vec<String> {
        if format.is_tar_family() {
            vec![
                self.config.tar_bin.clone(),
                "-xvf".to_string(),
                archive.to_string_lossy().to_string(),
                "-C".to_string(),
                dest.to_string_lossy().to_string(),
                "--warning=none".to_string(),
            ]
        } else {
            let password = request.password.as_deref().unwrap_or("");
            vec![
                self.config.archiver_bin.clone(),
                "e".to_string(),
                "-y".to_string(),
                archive.to_string_lossy().to_string(),
                format!("-o{}", dest.to_string_lossy()),
                format!("-p{password}"),
            ]
        }
    }
}

/// Classifies the tool output of a creation or split run.
fn classify_creation(output: CommandOutput, output_dir: PathBuf) -> ArchiveOutcome {
    if output.stderr.is_empty() {
        ArchiveOutcome::Success { output_dir }
    } else {
        log::error!("archiver reported: {}", output.stderr);
        ArchiveOutcome::ToolError {
            stderr: output.stderr,
        }
    }
}

/// Classifies the tool output of an extraction run.
///
/// The wrong-password marker takes precedence over the exit code; 7z exits
/// non-zero for plenty of benign reasons while the marker is unambiguous.
fn classify_extraction(output: CommandOutput, dest: PathBuf) -> ArchiveOutcome {
    if output.stderr.contains(WRONG_PASSWORD_MARKER) {
        return ArchiveOutcome::WrongPassword;
    }
    if !output.stderr.is_empty() {
        log::error!("extraction failed: {}", output.stderr);
        log::error!("tool stdout was: {}", output.stdout);
        return ArchiveOutcome::ToolError {
            stderr: output.stderr,
        };
    }
    ArchiveOutcome::Success { output_dir: dest }
}
