//! Error types for archive extraction operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur during archive extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is neither a valid ZIP nor a valid RAR container.
    #[error("unsupported archive format (not ZIP or RAR): {path}")]
    UnsupportedFormat {
        /// The file that failed signature checks.
        path: PathBuf,
    },

    /// Content sniffing succeeded but the container is corrupt.
    #[error("invalid archive {path}: {reason}")]
    InvalidArchive {
        /// The archive file.
        path: PathBuf,
        /// What the format reader rejected.
        reason: String,
    },

    /// File is a RAR container but no RAR-capable backend is installed.
    ///
    /// This is an environment error, not a data error: the fix is to
    /// install an extraction utility, not to question the archive.
    #[error("no RAR extraction backend available for {path}: {probes}")]
    MissingExtractionSupport {
        /// The RAR file that cannot be handled.
        path: PathBuf,
        /// Per-probe failure reasons, joined for display.
        probes: String,
    },

    /// A RAR backend is active but its utility could not be run.
    #[error("extraction tool `{tool}` failed: {reason}")]
    ExtractionToolFailure {
        /// The external program that failed.
        tool: String,
        /// Spawn error or captured diagnostic output.
        reason: String,
    },

    /// Destination directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },
}

impl ExtractionError {
    /// Returns `true` if this error only means the file could not be
    /// opened as an archive.
    ///
    /// At nested recursion depth these failures are recorded as
    /// warnings and the nested archive contributes nothing; sibling
    /// extraction continues. At the top level they are hard errors.
    /// I/O and directory-creation failures are never recoverable.
    ///
    /// # Examples
    ///
    /// ```
    /// use rexar_core::ExtractionError;
    /// use std::path::PathBuf;
    ///
    /// let err = ExtractionError::UnsupportedFormat {
    ///     path: PathBuf::from("notes.txt"),
    /// };
    /// assert!(err.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. }
                | Self::InvalidArchive { .. }
                | Self::MissingExtractionSupport { .. }
                | Self::ExtractionToolFailure { .. }
        )
    }
}
