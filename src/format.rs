//! Supported extraction formats.

use std::path::Path;

/// An archive format this crate knows how to hand to an external tool.
///
/// Detection is purely extension based; no file signatures are read. The
/// two-part tar suffixes are checked before single extensions so that
/// `backup.tar.gz` resolves to [`TarGz`](Self::TarGz) rather than a bare
/// gzip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// `.zip`
    Zip,
    /// `.7z`
    SevenZ,
    /// `.tar`
    Tar,
    /// `.tar.gz`
    TarGz,
    /// `.tar.bz2`
    TarBz2,
    /// `.gzip2`
    Gzip2,
    /// `.iso`
    Iso,
    /// `.wim`
    Wim,
    /// `.rar`
    Rar,
}

impl ArchiveFormat {
    /// Detects the format from a path's extension, case-insensitively.
    ///
    /// Returns `None` for unsupported extensions; the caller reports those
    /// as [`ArchiveOutcome::UnsupportedFormat`](crate::ArchiveOutcome) and
    /// never invokes a tool for them.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_lowercase();

        // Two-part suffixes first.
        if name.ends_with(".tar.gz") {
            return Some(Self::TarGz);
        }
        if name.ends_with(".tar.bz2") {
            return Some(Self::TarBz2);
        }

        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "zip" => Some(Self::Zip),
            "7z" => Some(Self::SevenZ),
            "tar" => Some(Self::Tar),
            "gzip2" => Some(Self::Gzip2),
            "iso" => Some(Self::Iso),
            "wim" => Some(Self::Wim),
            "rar" => Some(Self::Rar),
            _ => None,
        }
    }

    /// Returns `true` for formats extracted with `tar` rather than the
    /// general archiver.
    pub fn is_tar_family(self) -> bool {
        matches!(self, Self::Tar | Self::TarGz | Self::TarBz2)
    }
}
