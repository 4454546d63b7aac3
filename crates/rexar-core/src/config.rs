//! Extraction configuration.

use std::path::PathBuf;

use crate::extension::ExtensionFilter;

/// Configuration for one extraction call.
///
/// # Examples
///
/// ```
/// use rexar_core::ExtensionFilter;
/// use rexar_core::ExtractOptions;
///
/// // Defaults: derived destination, no filtering, keep the source,
/// // no overwriting, safe paths only, one nested archive.
/// let options = ExtractOptions::default();
///
/// // Customize for specific needs
/// let custom = ExtractOptions {
///     extensions: ExtensionFilter::parse("srt"),
///     recursion_budget: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Destination directory. `None` derives it from the archive path
    /// by stripping its final extension; an explicitly empty path
    /// means the current working directory.
    pub destination: Option<PathBuf>,

    /// Extensions to retain in the output listing. Empty = keep all.
    pub extensions: ExtensionFilter,

    /// Do not delete the source archive after successful extraction.
    pub keep_source: bool,

    /// Re-extract members whose destination file already exists. When
    /// false, existing files are skipped (an unlocked, best-effort
    /// check) but still appear in the listing and stay eligible for
    /// recursion.
    pub overwrite: bool,

    /// Drop members with unsafe internal paths instead of extracting
    /// them. Disabling this accepts the path-traversal risk.
    pub safe: bool,

    /// Total nested archives to expand across the whole call tree,
    /// shared by all recursive descents. Zero disables recursion;
    /// negative values are unlimited, which risks extraction bombs.
    pub recursion_budget: i64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            destination: None,
            extensions: ExtensionFilter::all(),
            keep_source: true,
            overwrite: false,
            safe: true,
            recursion_budget: 1,
        }
    }
}

impl ExtractOptions {
    /// Sets an explicit destination directory.
    #[must_use]
    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    /// Sets the output extension filter.
    #[must_use]
    pub fn with_extensions(mut self, extensions: ExtensionFilter) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets the recursion budget.
    #[must_use]
    pub fn with_recursion_budget(mut self, budget: i64) -> Self {
        self.recursion_budget = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_entry_point_signature() {
        let options = ExtractOptions::default();
        assert!(options.destination.is_none());
        assert!(options.extensions.is_empty());
        assert!(options.keep_source);
        assert!(!options.overwrite);
        assert!(options.safe);
        assert_eq!(options.recursion_budget, 1);
    }

    #[test]
    fn test_builders() {
        let options = ExtractOptions::default()
            .with_destination(Some(PathBuf::from("out")))
            .with_extensions(ExtensionFilter::parse("srt"))
            .with_recursion_budget(-1);
        assert_eq!(options.destination, Some(PathBuf::from("out")));
        assert!(options.extensions.contains("srt"));
        assert_eq!(options.recursion_budget, -1);
    }
}
