//! Size measurement for files and directory trees.

use std::path::Path;

use walkdir::WalkDir;

use crate::Result;

/// Number of bytes in one mebibyte.
pub const MIB: u64 = 1024 * 1024;

/// Returns the total size in bytes of the file or directory tree at `path`.
///
/// A single file counts as a tree of one. Symbolic links are excluded from
/// the sum and never followed, so cycles cannot inflate the total. An empty
/// directory measures 0 bytes.
///
/// # Errors
///
/// Traversal and metadata failures (including permission errors) propagate
/// as [`Error::Walk`](crate::Error::Walk); they are never silently counted
/// as zero.
pub fn tree_size(path: &Path) -> Result<u64> {
    let mut total = 0u64;
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry?;
        if entry.path_is_symlink() {
            continue;
        }
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
