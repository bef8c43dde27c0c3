//! # partzip
//!
//! Async orchestration of the `7z` and `tar` command-line tools for
//! packaging, splitting, and extracting archives.
//!
//! This crate does not compress anything itself. It decides how to invoke
//! the external tools, lays out output directories, computes the part-size
//! arithmetic for splitting large payloads, and interprets tool output into
//! the typed [`ArchiveOutcome`] so callers can match every case
//! exhaustively instead of parsing strings.
//!
//! ## Creating an Archive
//!
//! ```rust,no_run
//! use partzip::{ArchiveOutcome, ArchiveRequest, Archiver, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let archiver = Archiver::new();
//!
//!     // Split into parts of at most ~2 GB if the payload is large enough.
//!     let request = ArchiveRequest::new("/data/upload")
//!         .max_part_bytes(2_000_000_000)
//!         .compression_level(5);
//!
//!     match archiver.create(request).await? {
//!         ArchiveOutcome::Success { output_dir } => {
//!             println!("archive written to {}", output_dir.display());
//!         }
//!         ArchiveOutcome::ToolError { stderr } => eprintln!("7z failed: {stderr}"),
//!         other => eprintln!("unexpected outcome: {other:?}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Extracting an Archive
//!
//! ```rust,no_run
//! use partzip::{ArchiveOutcome, Archiver, ExtractionRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let archiver = Archiver::new();
//!     let request = ExtractionRequest::new("backup.7z").password("secret");
//!
//!     match archiver.extract(request).await? {
//!         ArchiveOutcome::Success { output_dir } => {
//!             println!("extracted into {}", output_dir.display());
//!         }
//!         ArchiveOutcome::WrongPassword => eprintln!("wrong password, try again"),
//!         other => eprintln!("cannot extract: {other:?}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Design Notes
//!
//! - Every operation is stateless and independent; the only shared resource
//!   is the filesystem, and directory creation is idempotent.
//! - Operations suspend only while awaiting the external process; no thread
//!   is blocked during a tool run.
//! - There are no retries and no timeouts at this layer. A caller wanting a
//!   timeout wraps the future itself.
//! - Failures that prevented running the tool at all are [`Error`]s;
//!   everything about a completed (or deliberately skipped) run is an
//!   [`ArchiveOutcome`].

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod outcome;
pub mod plan;
pub mod probe;

mod archiver;

pub use archiver::{Archiver, ExtractionRequest};
pub use command::{CommandLine, CommandOutput};
pub use config::ArchiverConfig;
pub use error::{Error, Result};
pub use format::ArchiveFormat;
pub use outcome::ArchiveOutcome;
pub use plan::{ArchivePlan, ArchiveRequest, part_size_mib};
pub use probe::tree_size;
