//! Member path traversal screening.
//!
//! Screening operates purely on the string form of archive-internal
//! paths and performs no filesystem resolution. It is deliberately
//! conservative: `/../` is rejected as a substring wherever it
//! appears.

/// Returns `true` for member paths capable of writing outside the
/// destination directory: absolute paths and parent-directory escapes.
///
/// # Examples
///
/// ```
/// use rexar_core::security::is_unsafe_member;
///
/// assert!(is_unsafe_member("/etc/passwd"));
/// assert!(is_unsafe_member("../evil"));
/// assert!(is_unsafe_member("ok/../../evil"));
/// assert!(!is_unsafe_member("dir/file.txt"));
/// ```
#[must_use]
pub fn is_unsafe_member(name: &str) -> bool {
    name.starts_with('/') || name.starts_with("../") || name.contains("/../")
}

/// Outcome of screening a member list.
#[derive(Debug, Clone, Default)]
pub struct MemberScreen {
    /// Members considered safe to process, in original order.
    pub kept: Vec<String>,
    /// Members dropped as unsafe, in original order.
    pub rejected: Vec<String>,
}

/// Splits a member list into safe and unsafe paths.
///
/// With `safe` false no screening occurs and every member is kept;
/// the caller accepts the traversal risk.
#[must_use]
pub fn screen_members(names: Vec<String>, safe: bool) -> MemberScreen {
    if !safe {
        return MemberScreen {
            kept: names,
            rejected: Vec::new(),
        };
    }
    let mut screen = MemberScreen::default();
    for name in names {
        if is_unsafe_member(&name) {
            screen.rejected.push(name);
        } else {
            screen.kept.push(name);
        }
    }
    screen
}
