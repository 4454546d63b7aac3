//! Error conversion utilities for CLI.
//!
//! Converts rexar-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use rexar_core::ExtractionError;
use std::path::Path;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::UnsupportedFormat { path } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Only ZIP and RAR content is recognized; the format is \
                 detected from file content, not the file name.",
                path.display()
            )
        }
        ExtractionError::InvalidArchive { path, reason } => {
            anyhow!(
                "Invalid archive '{}': {reason}\n\
                 HINT: The archive may be corrupted or truncated.",
                path.display()
            )
        }
        ExtractionError::MissingExtractionSupport { path, probes } => {
            anyhow!(
                "No RAR extraction tool available for '{}' ({probes})\n\
                 HINT: Install unrar, unar or bsdtar and make sure it is on PATH.",
                path.display()
            )
        }
        ExtractionError::ExtractionToolFailure { tool, reason } => {
            anyhow!(
                "Extraction tool '{tool}' failed on '{}': {reason}\n\
                 HINT: Run the tool manually against the archive to diagnose.",
                archive.display()
            )
        }
        ExtractionError::CreateDir { path, source } => {
            anyhow!(
                "Could not create destination directory '{}': {source}",
                path.display()
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {io_err}",
                archive.display()
            )
        }
    }
}

/// Adds context to a core result about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_unsupported_format_error() {
        let err = ExtractionError::UnsupportedFormat {
            path: PathBuf::from("notes.txt"),
        };
        let converted = convert_extraction_error(err, Path::new("notes.txt"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("not supported"));
        assert!(msg.contains("notes.txt"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_missing_support_error() {
        let err = ExtractionError::MissingExtractionSupport {
            path: PathBuf::from("video.rar"),
            probes: "unrar: not found; unar: not found; bsdtar: not found".to_string(),
        };
        let converted = convert_extraction_error(err, Path::new("video.rar"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("video.rar"));
        assert!(msg.contains("Install unrar"));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ExtractionError::Io(io_err);
        let converted = convert_extraction_error(err, Path::new("bundle.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("bundle.zip"));
    }
}
