//! RAR container reading via an external backend.

use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::Result;

use super::backend::RarBackend;

/// An open, read-only RAR container.
///
/// Listing happens once at open time through the active backend; the
/// cached member list keeps `member_names()` side-effect free and
/// repeatable, matching the ZIP handle.
pub struct RarHandle {
    path: PathBuf,
    backend: &'static RarBackend,
    names: Vec<String>,
}

impl RarHandle {
    /// Opens a RAR file through the active backend.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::MissingExtractionSupport` when no
    /// backend probe succeeded, and
    /// `ExtractionError::ExtractionToolFailure` when the backend's
    /// utility cannot list the archive.
    pub fn open(path: &Path) -> Result<Self> {
        let backend = RarBackend::active().map_err(|probes| {
            ExtractionError::MissingExtractionSupport {
                path: path.to_path_buf(),
                probes: probes.to_owned(),
            }
        })?;
        let names = backend.list(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            backend,
            names,
        })
    }

    /// Member paths in container order. Safe to call repeatedly.
    #[must_use]
    pub fn member_names(&self) -> &[String] {
        &self.names
    }

    /// Writes the requested member subset into `dest` via the backend
    /// utility. Returns the number of members handed to the tool.
    pub fn extract_members(&self, dest: &Path, members: &BTreeSet<String>) -> Result<usize> {
        self.backend.extract(&self.path, dest, members)?;
        Ok(members.len())
    }
}
