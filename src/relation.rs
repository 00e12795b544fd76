//! Ancestor / containment testing between path strings.
//!
//! Comparison is ordinal on characters: no case folding, no `.`/`..`
//! resolution, and no separator-style translation. The only latitude
//! granted is a single optional trailing separator on either argument,
//! and prefix matches must land on a segment boundary — `C:\ABC` is a
//! string prefix of `C:\ABCD` but not an ancestor of it.

use crate::mode::PlatformMode;

/// How a candidate path relates to a would-be ancestor.
///
/// # Examples
///
/// ```
/// use pathmode::{PathRelation, PlatformMode};
///
/// let windows = PlatformMode::WindowsLike;
/// assert_eq!(
///     PathRelation::between(r"C:\ABCD\EFGH", r"C:\ABCD", windows),
///     PathRelation::Child
/// );
/// assert_eq!(
///     PathRelation::between(r"C:\ABCD", r"C:\ABCD\", windows),
///     PathRelation::Same
/// );
/// assert_eq!(
///     PathRelation::between(r"C:\ABCDE", r"C:\ABCD", windows),
///     PathRelation::Unrelated
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelation {
    /// The two paths are the same directory, modulo a single trailing
    /// separator on either side.
    Same,
    /// The candidate lies strictly beneath the ancestor.
    Child,
    /// Neither of the above.
    Unrelated,
}

impl PathRelation {
    /// Determines how `candidate` relates to `ancestor`.
    ///
    /// Both arguments have at most one trailing separator ignored; nothing
    /// else is normalized. A prefix match counts only when the character
    /// in `candidate` immediately after the matched ancestor is a
    /// separator, keeping the match segment-aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmode::{PathRelation, PlatformMode};
    ///
    /// let rel = PathRelation::between("/a/b", "/a", PlatformMode::UnixLike);
    /// assert_eq!(rel, PathRelation::Child);
    ///
    /// let rel = PathRelation::between("/ab", "/a", PlatformMode::UnixLike);
    /// assert_eq!(rel, PathRelation::Unrelated);
    /// ```
    #[must_use]
    pub fn between(candidate: &str, ancestor: &str, mode: PlatformMode) -> Self {
        let candidate = trim_trailing_separator(candidate, mode);
        let ancestor = trim_trailing_separator(ancestor, mode);

        if candidate == ancestor {
            return Self::Same;
        }

        if candidate.len() > ancestor.len()
            && candidate.starts_with(ancestor)
            && mode.is_separator_byte(candidate.as_bytes()[ancestor.len()])
        {
            return Self::Child;
        }

        Self::Unrelated
    }

    /// Whether this relation means "same directory or a descendant of it".
    #[must_use]
    pub const fn is_same_or_child(self) -> bool {
        matches!(self, Self::Same | Self::Child)
    }
}

/// Returns `true` iff `candidate` is the same directory as `ancestor` or
/// lies beneath it.
///
/// # Examples
///
/// ```
/// use pathmode::{is_same_directory_or_child_of, PlatformMode};
///
/// let windows = PlatformMode::WindowsLike;
/// assert!(is_same_directory_or_child_of(r"C:\ABCD\EFGH", r"C:\ABCD", windows));
/// assert!(is_same_directory_or_child_of(r"C:\ABCD\EFGH", "C:", windows));
/// assert!(!is_same_directory_or_child_of(r"C:\A\B\C", r"C:\A\B\C\D", windows));
/// ```
#[must_use]
pub fn is_same_directory_or_child_of(candidate: &str, ancestor: &str, mode: PlatformMode) -> bool {
    PathRelation::between(candidate, ancestor, mode).is_same_or_child()
}

/// Removes at most one trailing separator.
fn trim_trailing_separator(path: &str, mode: PlatformMode) -> &str {
    match path.as_bytes().last() {
        Some(&b) if mode.is_separator_byte(b) => &path[..path.len() - 1],
        _ => path,
    }
}
