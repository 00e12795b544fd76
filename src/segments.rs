//! Read-only segment iteration.
//!
//! A segment is a maximal run of non-separator characters. Iteration never
//! rewrites the path: `.` and `..` are yielded like any other segment, and
//! runs of separators are simply skipped over (producing no empty items).
//! Note that root tokens are yielded as raw segments too — `C:` for a
//! drive path, the server and share names for a UNC path. Callers that
//! need root-aware behavior classify first (see `contains_path_component`).

use crate::mode::PlatformMode;

/// Iterates over the non-empty segments of `path` under the given mode.
///
/// # Examples
///
/// ```
/// use pathmode::{segments, PlatformMode};
///
/// let parts: Vec<_> = segments(r"C:\temp\..\goo.txt", PlatformMode::WindowsLike).collect();
/// assert_eq!(parts, ["C:", "temp", "..", "goo.txt"]);
///
/// // Unix-like mode splits on `/` only; backslashes are ordinary characters.
/// let parts: Vec<_> = segments(r"a\b/c", PlatformMode::UnixLike).collect();
/// assert_eq!(parts, [r"a\b", "c"]);
/// ```
#[must_use]
pub fn segments(path: &str, mode: PlatformMode) -> Segments<'_> {
    Segments { rest: path, mode }
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    mode: PlatformMode,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.rest.as_bytes();
        let start = bytes
            .iter()
            .position(|&b| !self.mode.is_separator_byte(b))?;
        let end = bytes[start..]
            .iter()
            .position(|&b| self.mode.is_separator_byte(b))
            .map_or(bytes.len(), |i| start + i);
        let segment = &self.rest[start..end];
        self.rest = &self.rest[end..];
        Some(segment)
    }
}
