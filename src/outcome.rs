//! Typed outcomes for archive creation, splitting, and extraction.

use std::path::{Path, PathBuf};

/// The classified result of a completed archive operation.
///
/// Every operation on [`Archiver`](crate::Archiver) that actually ran (or
/// deliberately declined to run) the external tool reports one of these
/// variants. Callers are expected to match exhaustively; there is no catch-all
/// "something went wrong" string to parse.
///
/// # Example
///
/// ```rust,no_run
/// use partzip::{ArchiveOutcome, Archiver, ExtractionRequest};
///
/// # async fn demo() -> partzip::Result<()> {
/// let archiver = Archiver::new();
/// match archiver.extract(ExtractionRequest::new("data.7z")).await? {
///     ArchiveOutcome::Success { output_dir } => {
///         println!("extracted into {}", output_dir.display());
///     }
///     ArchiveOutcome::WrongPassword => println!("ask the user for the password"),
///     ArchiveOutcome::NotExtractable => println!("that is a directory, not an archive"),
///     ArchiveOutcome::UnsupportedFormat => println!("unknown archive extension"),
///     ArchiveOutcome::Fatal => println!("no such file"),
///     ArchiveOutcome::ToolError { stderr } => eprintln!("7z said: {stderr}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The operation succeeded; the produced files live under `output_dir`.
    Success {
        /// Directory containing the created archive parts or the extracted
        /// contents.
        output_dir: PathBuf,
    },

    /// The tool reported that the supplied password was wrong.
    ///
    /// Recoverable: the caller may re-prompt for credentials and retry.
    WrongPassword,

    /// The input exists but is a directory, which cannot be extracted.
    NotExtractable,

    /// The input is a file but its extension is not in the supported set.
    ///
    /// No tool was invoked and nothing was created on disk.
    UnsupportedFormat,

    /// The input path does not exist at all.
    Fatal,

    /// The tool produced diagnostic output on stderr.
    ///
    /// Partially written files, if any, are left in place for diagnostics.
    ToolError {
        /// The captured stderr of the external tool.
        stderr: String,
    },
}

impl ArchiveOutcome {
    /// Returns `true` for the [`Success`](Self::Success) variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the output directory on success, `None` otherwise.
    pub fn output_dir(&self) -> Option<&Path> {
        match self {
            Self::Success { output_dir } => Some(output_dir),
            _ => None,
        }
    }
}
