//! Format-agnostic archive handle.
//!
//! A closed set of container variants behind one read-only interface,
//! selected by an explicit factory that sniffs file content. The
//! handle is owned by one extraction call and released when it goes
//! out of scope, on every exit path.

use std::collections::BTreeSet;
use std::path::Path;

use crate::Result;
use crate::formats::ArchiveKind;
use crate::formats::RarHandle;
use crate::formats::ZipHandle;
use crate::formats::sniff_format;

/// An open, read-only view over a ZIP or RAR container.
pub enum ArchiveHandle {
    /// ZIP-backed handle.
    Zip(ZipHandle),
    /// RAR-backed handle.
    Rar(RarHandle),
}

impl ArchiveHandle {
    /// Opens the archive at `path`, choosing the variant by magic-byte
    /// sniffing. File name extensions play no part in the decision.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::UnsupportedFormat` when the content
    /// matches neither signature, `ExtractionError::InvalidArchive`
    /// for corrupt containers, and the backend errors described on
    /// `RarHandle::open` for RAR files.
    pub fn open(path: &Path) -> Result<Self> {
        match sniff_format(path)? {
            ArchiveKind::Zip => Ok(Self::Zip(ZipHandle::open(path)?)),
            ArchiveKind::Rar => Ok(Self::Rar(RarHandle::open(path)?)),
        }
    }

    /// Member paths in container order, archive-internal and
    /// forward-slash separated. No side effects.
    #[must_use]
    pub fn member_names(&self) -> &[String] {
        match self {
            Self::Zip(zip) => zip.member_names(),
            Self::Rar(rar) => rar.member_names(),
        }
    }

    /// Writes exactly the requested member subset into `dest`,
    /// preserving internal directory structure. Returns the number of
    /// entries written.
    pub fn extract_members(&mut self, dest: &Path, members: &BTreeSet<String>) -> Result<usize> {
        match self {
            Self::Zip(zip) => zip.extract_members(dest, members),
            Self::Rar(rar) => rar.extract_members(dest, members),
        }
    }

    /// Short format name for diagnostics.
    #[must_use]
    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Zip(_) => "zip",
            Self::Rar(_) => "rar",
        }
    }
}
