//! Whole-segment containment testing.
//!
//! Checks whether a named component occurs as one entire segment of a
//! path. This is not substring search: `packages` is not contained in
//! `c:\packages1\temp`, and the UNC *server* token is part of the root
//! rather than a segment, so `\\packages\temp` does not contain
//! `packages` either. The share token and everything after it are
//! ordinary, matchable segments.

use crate::error::{Error, Result};
use crate::mode::PlatformMode;
use crate::root::RootDescriptor;
use crate::segments::segments;

/// Returns `true` iff `component` equals one whole segment of `path`.
///
/// With `ignore_case` set, segments are compared with ASCII case folding;
/// otherwise the comparison is ordinal.
///
/// # Errors
///
/// Returns an error if `component` is empty or itself contains a
/// separator under the given mode — such a needle names no single
/// segment and the call is a precondition violation.
///
/// # Examples
///
/// ```
/// use pathmode::{contains_path_component, PlatformMode};
///
/// let windows = PlatformMode::WindowsLike;
/// assert!(contains_path_component(r"c:\packages\temp", "packages", true, windows).unwrap());
/// assert!(!contains_path_component(r"c:\packages1\temp", "packages", true, windows).unwrap());
///
/// // The server name is part of the UNC root, not a segment.
/// assert!(!contains_path_component(r"\\packages\temp", "packages", true, windows).unwrap());
///
/// // A component containing a separator is rejected.
/// assert!(contains_path_component("a/b", "a/b", false, PlatformMode::UnixLike).is_err());
/// ```
pub fn contains_path_component(
    path: &str,
    component: &str,
    ignore_case: bool,
    mode: PlatformMode,
) -> Result<bool> {
    if component.is_empty() {
        return Err(Error::EmptyComponent);
    }
    if component.bytes().any(|b| mode.is_separator_byte(b)) {
        return Err(Error::SeparatorInComponent {
            component: component.to_string(),
        });
    }

    let root = RootDescriptor::of(path, mode);
    let mut segs = segments(path, mode);
    if root.kind().is_unc() {
        // Skip the server token; it belongs to the root.
        segs.next();
    }
    Ok(segs.any(|segment| component_eq(segment, component, ignore_case)))
}

fn component_eq(segment: &str, component: &str, ignore_case: bool) -> bool {
    if ignore_case {
        segment.eq_ignore_ascii_case(component)
    } else {
        segment == component
    }
}
