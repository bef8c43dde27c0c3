//! Error types for archive orchestration.
//!
//! This module provides the [`Error`] enum covering the environmental
//! failure modes of this crate (filesystem access, process spawning,
//! command tokenization), along with a convenient [`Result<T>`] alias.
//!
//! Note the split between errors and outcomes: anything that can be said
//! about a tool run that *completed* (wrong password, diagnostic output on
//! stderr, an input that is not extractable) is reported as an
//! [`ArchiveOutcome`](crate::ArchiveOutcome) variant, not as an `Error`.
//! `Error` is reserved for conditions where no outcome could be produced at
//! all.
//!
//! # Example
//!
//! ```rust,no_run
//! use partzip::{ArchiveRequest, Archiver, Error};
//!
//! # async fn demo() -> partzip::Result<()> {
//! let archiver = Archiver::new();
//! match archiver.create(ArchiveRequest::new("/no/such/path")).await {
//!     Err(Error::InvalidInput { path }) => {
//!         eprintln!("source does not exist: {}", path.display());
//!     }
//!     other => {
//!         let _ = other?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::PathBuf;

/// The main error type for archive orchestration operations.
///
/// Each variant represents a failure that prevented an operation from
/// producing an [`ArchiveOutcome`](crate::ArchiveOutcome).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while touching the filesystem or spawning the
    /// external tool.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The directory walk performed by the size probe failed.
    ///
    /// Permission errors encountered while measuring a tree surface here
    /// rather than being silently treated as zero bytes.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The source path of an archive request does not exist at plan time.
    #[error("source path does not exist: {}", .path.display())]
    InvalidInput {
        /// The offending source path.
        path: PathBuf,
    },

    /// A shell-style command string could not be tokenized.
    #[error("cannot tokenize command line: {0}")]
    CommandParse(#[from] shell_words::ParseError),

    /// A command line contained no tokens at all.
    #[error("empty command line")]
    EmptyCommand,
}

/// A specialized `Result` type for archive orchestration operations.
pub type Result<T> = std::result::Result<T, Error>;
