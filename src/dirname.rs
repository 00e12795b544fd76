//! Directory-name extraction.
//!
//! Reproduces the platform's native "everything except the final segment"
//! semantics, including the asymmetric root edge cases, without consulting
//! a filesystem. `.` and `..` segments are ordinary segments here: the
//! directory name of `C:\temp\..\goo.txt` is `C:\temp\..`, never `C:\`.

use crate::mode::PlatformMode;
use crate::root::RootDescriptor;

/// Returns the parent-segment prefix of `path`, or `None` when the path
/// has no representable parent.
///
/// The result is a borrow of the input; nothing is copied or rewritten.
/// `None` is returned for the empty string and for any path that is a
/// root and nothing more (`C:\`, `C:`, `/`, `\\server\share`, `\\server`,
/// `\\`, `\`). A lone relative segment yields `Some("")`.
///
/// Trailing separators are not part of the final segment, and a run of
/// separators before the final segment collapses into a single boundary
/// for the purpose of the backward scan — the path itself is never
/// rewritten.
///
/// # Examples
///
/// ```
/// use pathmode::{directory_name, PlatformMode};
///
/// let windows = PlatformMode::WindowsLike;
/// assert_eq!(directory_name(r"C:\temp\goo.txt", windows), Some(r"C:\temp"));
/// assert_eq!(directory_name(r"C:\temp", windows), Some(r"C:\"));
/// assert_eq!(directory_name(r"C:\", windows), None);
/// assert_eq!(directory_name("goo", windows), Some(""));
///
/// let unix = PlatformMode::UnixLike;
/// assert_eq!(directory_name("/temp", unix), Some("/"));
/// assert_eq!(directory_name("/", unix), None);
/// ```
#[must_use]
pub fn directory_name(path: &str, mode: PlatformMode) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    let root_len = RootDescriptor::of(path, mode).len();
    if path.len() <= root_len {
        // The root alone has no parent.
        return None;
    }

    let bytes = path.as_bytes();
    let mut end = path.len();
    while end > root_len {
        end -= 1;
        if mode.is_separator_byte(bytes[end]) {
            if end > 0 && mode.is_separator_byte(bytes[end - 1]) {
                // Absorb a separator run into a single boundary.
                continue;
            }
            break;
        }
    }
    // If no separator was found past the root, `end` sits at the root
    // boundary and the result is the root itself (or "" for a lone
    // relative segment).
    Some(&path[..end])
}

/// Returns the final segment of `path`: everything after the last
/// separator at or beyond the root boundary.
///
/// A path that is a root and nothing more yields the empty string, as
/// does a path ending in a separator.
///
/// # Examples
///
/// ```
/// use pathmode::{file_name, PlatformMode};
///
/// let windows = PlatformMode::WindowsLike;
/// assert_eq!(file_name(r"C:\temp\goo.txt", windows), "goo.txt");
/// assert_eq!(file_name("C:temp", windows), "temp");
/// assert_eq!(file_name(r"C:\", windows), "");
/// assert_eq!(file_name("goo/", PlatformMode::UnixLike), "");
/// ```
#[must_use]
pub fn file_name(path: &str, mode: PlatformMode) -> &str {
    let root_len = RootDescriptor::of(path, mode).len();
    let after_sep = path
        .as_bytes()
        .iter()
        .rposition(|&b| mode.is_separator_byte(b))
        .map_or(0, |i| i + 1);
    &path[after_sep.max(root_len)..]
}
