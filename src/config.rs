//! Configuration for the archiver.

use std::path::{Path, PathBuf};

/// Default maximum part size in MiB when the request does not specify one.
pub const DEFAULT_PART_MIB: u64 = 1900;

/// Safety margin in MiB subtracted from an explicitly requested part size.
///
/// The archiver's `-v` flag counts in whole mebibytes, which is coarser than
/// the byte limit callers express; the margin keeps every emitted part under
/// the requested hard cap.
pub const PART_MARGIN_MIB: u64 = 10;

/// Default working root for extraction output.
pub const DEFAULT_WORKING_ROOT: &str = "userdata";

/// Tunable defaults for planning and execution.
///
/// All thresholds and tool names are carried here and passed explicitly into
/// the planner, so tests can override them without process-wide state.
///
/// # Example
///
/// ```rust
/// use partzip::ArchiverConfig;
///
/// let config = ArchiverConfig::new()
///     .default_part_mib(700)
///     .working_root("/var/lib/myapp/extract");
/// assert_eq!(config.default_part_mib, 700);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiverConfig {
    /// Name or path of the general archiver binary.
    pub archiver_bin: String,
    /// Name or path of the tar binary used for the tar format family.
    pub tar_bin: String,
    /// Part size in MiB used when a request carries no explicit limit.
    pub default_part_mib: u64,
    /// Margin in MiB subtracted from explicit part-size limits.
    pub part_margin_mib: u64,
    /// Root directory under which extraction sessions are created.
    pub working_root: PathBuf,
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self {
            archiver_bin: "7z".to_string(),
            tar_bin: "tar".to_string(),
            default_part_mib: DEFAULT_PART_MIB,
            part_margin_mib: PART_MARGIN_MIB,
            working_root: PathBuf::from(DEFAULT_WORKING_ROOT),
        }
    }
}

impl ArchiverConfig {
    /// Creates a configuration with the stock defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the general archiver binary.
    pub fn archiver_bin(mut self, bin: impl Into<String>) -> Self {
        self.archiver_bin = bin.into();
        self
    }

    /// Sets the tar binary.
    pub fn tar_bin(mut self, bin: impl Into<String>) -> Self {
        self.tar_bin = bin.into();
        self
    }

    /// Sets the default part size in MiB.
    pub fn default_part_mib(mut self, mib: u64) -> Self {
        self.default_part_mib = mib;
        self
    }

    /// Sets the margin subtracted from explicit part-size limits.
    pub fn part_margin_mib(mut self, mib: u64) -> Self {
        self.part_margin_mib = mib;
        self
    }

    /// Sets the extraction working root.
    pub fn working_root(mut self, root: impl AsRef<Path>) -> Self {
        self.working_root = root.as_ref().to_path_buf();
        self
    }
}
