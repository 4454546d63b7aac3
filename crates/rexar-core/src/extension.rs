//! Filename extension classification and filtering.

use std::collections::BTreeSet;
use std::fmt;

/// Returns the normalized filename extension: lowercase, without the
/// leading dot, taken from the final path segment only.
///
/// Can be empty. A leading "hidden file" dot is not an extension
/// separator, and neither is a trailing dot.
///
/// # Examples
///
/// ```
/// use rexar_core::extension_of;
///
/// assert_eq!(extension_of("A.JPG"), "jpg");
/// assert_eq!(extension_of("noext"), "");
/// assert_eq!(extension_of(".hidden"), "");
/// assert_eq!(extension_of("dir.d/file"), "");
/// ```
#[must_use]
pub fn extension_of(path: &str) -> String {
    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let trimmed = segment.trim_start_matches('.');
    match trimmed.rfind('.') {
        Some(index) if index + 1 < trimmed.len() => trimmed[index + 1..].to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// A set of filename extensions used to narrow an extraction listing.
///
/// An empty filter matches everything. Extensions are stored
/// lowercase without dots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// A filter that matches everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from an iterator of extensions. Entries are
    /// trimmed and lowercased; empty entries are dropped.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// Parses a comma-separated extension list, e.g. `"srt,sub,ass"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rexar_core::ExtensionFilter;
    ///
    /// let filter = ExtensionFilter::parse("SRT, sub,");
    /// assert!(filter.matches("movie.srt"));
    /// assert!(filter.matches("movie.SUB"));
    /// assert!(!filter.matches("movie.mkv"));
    /// ```
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        Self::new(spec.split(','))
    }

    /// Returns `true` when no extensions were supplied, meaning "no
    /// filtering".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Returns `true` when the filter is empty or contains
    /// `extension_of(path)`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.extensions.is_empty() || self.extensions.contains(&extension_of(path))
    }

    /// Membership test for an already-normalized extension.
    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extensions.is_empty() {
            return write!(f, "*");
        }
        let mut first = true;
        for ext in &self.extensions {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{ext}")?;
            first = false;
        }
        Ok(())
    }
}
