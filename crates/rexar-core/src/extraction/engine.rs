//! The recursive extraction algorithm.
//!
//! One `Extractor` call extracts an archive, optionally descending
//! into archives found inside it. The recursion budget is a single
//! pool shared across the whole call tree: every recursive call
//! returns the remaining budget, which the caller adopts before
//! visiting its next sibling member, so siblings at any depth compete
//! for the same units in depth-first order.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use crate::ExtractionError;
use crate::Result;
use crate::archive::ArchiveHandle;
use crate::config::ExtractOptions;
use crate::extension::extension_of;
use crate::report::ExtractionReport;
use crate::security::screen_members;

/// Extensions treated as nested archives for recursive descent.
fn is_archive_extension(ext: &str) -> bool {
    matches!(ext, "zip" | "rar")
}

/// Derives a destination directory from an archive path by stripping
/// its final extension.
fn derive_destination(archive: &Path) -> PathBuf {
    archive.with_extension("")
}

/// Creates `path` and intermediate directories, reporting whether this
/// call actually created the leaf.
///
/// The created-now flag drives cleanup: only a directory this call
/// created may be removed again when extraction fails partway.
fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(|source| ExtractionError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Recursive archive extractor.
///
/// # Examples
///
/// ```no_run
/// use rexar_core::ExtractOptions;
/// use rexar_core::Extractor;
/// use std::path::Path;
///
/// # fn main() -> Result<(), rexar_core::ExtractionError> {
/// let extractor = Extractor::new(ExtractOptions::default());
/// let report = extractor.extract(Path::new("bundle.zip"))?;
/// println!("{} files listed", report.files.len());
/// # Ok(())
/// # }
/// ```
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Creates an extractor with the given configuration.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extracts `archive` and returns the filtered output listing.
    ///
    /// # Errors
    ///
    /// Open failures of the top-level archive are hard errors; the
    /// same failures on nested archives become warnings in the report.
    /// Directory-creation and other I/O failures propagate from any
    /// depth.
    pub fn extract(&self, archive: &Path) -> Result<ExtractionReport> {
        let start = Instant::now();
        let dest = self.top_level_destination(archive);
        let mut report = ExtractionReport::new();
        self.extract_into(archive, &dest, self.options.recursion_budget, true, &mut report)?;
        report.duration = start.elapsed();
        Ok(report)
    }

    /// Resolves the destination for the top-level call. Nested calls
    /// always derive their own.
    fn top_level_destination(&self, archive: &Path) -> PathBuf {
        match &self.options.destination {
            Some(path) if path.as_os_str().is_empty() => PathBuf::from("."),
            Some(path) => path.clone(),
            None => derive_destination(archive),
        }
    }

    /// Extracts one archive into `dest` and recurses into its nested
    /// archives. Returns the remaining recursion budget.
    fn extract_into(
        &self,
        archive: &Path,
        dest: &Path,
        budget: i64,
        root: bool,
        report: &mut ExtractionReport,
    ) -> Result<i64> {
        let mut handle = match ArchiveHandle::open(archive) {
            Ok(handle) => {
                if !root {
                    report.archives_expanded += 1;
                }
                handle
            }
            Err(err) if !root && err.is_recoverable() => {
                report.add_warning(format!(
                    "skipping nested archive {}: {err}",
                    archive.display()
                ));
                return Ok(budget);
            }
            Err(err) => return Err(err),
        };

        let screen = screen_members(handle.member_names().to_vec(), self.options.safe);
        for name in &screen.rejected {
            report.add_warning(format!(
                "not extracting member with unsafe path in {}: {name}",
                archive.display()
            ));
        }
        report.members_rejected += screen.rejected.len();
        let names = screen.kept;

        // Select the members to physically write. The selection uses
        // its own copy of the budget: it only decides how many nested
        // archives are worth materializing; the authoritative pool is
        // spent in the recursion walk below.
        let mut members: BTreeSet<String> = BTreeSet::new();
        let mut slots = budget;
        for name in &names {
            if !self.options.overwrite && dest.join(name).exists() {
                // Racy without locking against concurrent writers;
                // accepted as best effort.
                report.files_skipped += 1;
                continue;
            }
            if self.options.extensions.matches(name) {
                members.insert(name.clone());
            } else if slots != 0 && is_archive_extension(&extension_of(name)) {
                members.insert(name.clone());
                slots -= 1;
            }
        }

        if !members.is_empty() {
            let created_dest = ensure_dir(dest)?;
            match handle.extract_members(dest, &members) {
                Ok(written) => report.files_extracted += written,
                Err(err) => {
                    if created_dest {
                        // Single empty-dir removal; a dest that gained
                        // unrelated content stays.
                        let _ = fs::remove_dir(dest);
                    }
                    return Err(err);
                }
            }
        }

        // Release the container before recursing or deleting it.
        drop(handle);

        let mut remaining = budget;
        for name in &names {
            let output = dest.join(name);
            if self.options.extensions.matches(name) {
                report.files.push(output.clone());
            }
            if remaining != 0 && is_archive_extension(&extension_of(name)) {
                let nested_dest = derive_destination(&output);
                // A nested archive consumes its unit even when it
                // fails to open.
                remaining =
                    self.extract_into(&output, &nested_dest, remaining - 1, false, report)?;
            }
        }

        if !self.options.keep_source {
            if let Err(err) = fs::remove_file(archive) {
                // Already gone is fine; extraction succeeded, so any
                // other cleanup failure is reported but never fatal.
                if err.kind() != io::ErrorKind::NotFound {
                    report.add_warning(format!(
                        "could not remove source archive {}: {err}",
                        archive.display()
                    ));
                }
            }
        }

        Ok(remaining)
    }
}
