//! High-level public API for recursive archive extraction.

use std::path::Path;

use crate::Result;
use crate::config::ExtractOptions;
use crate::extraction::Extractor;
use crate::report::ExtractionReport;

/// Extracts an archive and returns the filtered listing of output
/// paths.
///
/// The archive format is detected from content. Nested ZIP/RAR
/// members are expanded in place up to `options.recursion_budget`
/// archives across the whole call tree.
///
/// # Errors
///
/// Returns an error if:
/// - The archive is neither valid ZIP nor RAR content
/// - It is RAR content but no extraction backend is installed
/// - The active backend's utility fails
/// - Directory creation or file I/O fails
///
/// Nested archives hitting the first three conditions are skipped
/// with a warning instead.
///
/// # Examples
///
/// ```no_run
/// use rexar_core::ExtractOptions;
/// use rexar_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_archive("bundle.zip", &ExtractOptions::default())?;
/// for path in &report.files {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>>(
    archive: P,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    Extractor::new(options.clone()).extract(archive.as_ref())
}
