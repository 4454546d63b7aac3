//! Extraction operation reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Report of a recursive extraction operation.
///
/// `files` is the extension-filtered output listing in depth-first
/// order, following the member order of each archive. It does not
/// distinguish paths that came from nested archives from top-level
/// ones.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Output file paths retained by the extension filter.
    pub files: Vec<PathBuf>,

    /// Number of entries physically written to disk.
    pub files_extracted: usize,

    /// Number of members skipped because their destination already
    /// existed and overwriting was off.
    pub files_skipped: usize,

    /// Number of members dropped by path-safety screening.
    pub members_rejected: usize,

    /// Number of nested archives successfully opened for descent. An
    /// unreadable nested archive produces a warning, not a count.
    pub archives_expanded: usize,

    /// Duration of the whole call, including nested extractions.
    pub duration: Duration,

    /// Non-fatal findings: unsafe members, unreadable nested archives,
    /// cleanup failures.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
