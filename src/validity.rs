//! Syntactic file-path validity.
//!
//! A purely textual check: no filesystem is consulted and nothing is
//! created. Windows-like mode enforces the classic reserved-character
//! table and the 260-byte total cap; Unix-like mode forbids only NUL.
//! Both modes cap individual segments at [`MAX_COMPONENT_LEN`] bytes and
//! reject a doubled trailing separator.

use crate::mode::PlatformMode;
use crate::root::{RootDescriptor, RootKind};
use crate::segments::segments;

/// Maximum length of a single path segment, in bytes, on either platform.
pub const MAX_COMPONENT_LEN: usize = 255;

/// Returns `true` iff `path` is syntactically acceptable as a file path
/// under the given mode.
///
/// Windows-like mode rejects empty and whitespace-only strings, trailing
/// separators, `"`, `<`, `>`, `|`, `*`, `?`, control characters below
/// 0x20, and `:` anywhere but the drive position. Unix-like mode rejects
/// only the empty string, embedded NUL, and a doubled trailing separator;
/// a single trailing separator and whitespace-only names are tolerated.
///
/// # Examples
///
/// ```
/// use pathmode::{is_valid_file_path, PlatformMode};
///
/// let windows = PlatformMode::WindowsLike;
/// let unix = PlatformMode::UnixLike;
///
/// assert!(is_valid_file_path("test/data1.txt", windows));
/// assert!(!is_valid_file_path("path/*.txt", windows));
/// assert!(is_valid_file_path("path/*.txt", unix));
/// assert!(!is_valid_file_path("data1//", unix));
/// ```
#[must_use]
pub fn is_valid_file_path(path: &str, mode: PlatformMode) -> bool {
    if path.is_empty() || path.len() > mode.max_path_len() {
        return false;
    }
    if segments(path, mode).any(|segment| segment.len() > MAX_COMPONENT_LEN) {
        return false;
    }
    match mode {
        PlatformMode::WindowsLike => valid_windows(path),
        PlatformMode::UnixLike => valid_unix(path),
    }
}

fn valid_windows(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    let bytes = path.as_bytes();
    if PlatformMode::WindowsLike.is_separator_byte(bytes[bytes.len() - 1]) {
        return false;
    }

    let root = RootDescriptor::of(path, PlatformMode::WindowsLike);
    let has_drive = matches!(
        root.kind(),
        RootKind::DriveAbsolute | RootKind::DriveRelative
    );
    for (i, c) in path.char_indices() {
        let forbidden = match c {
            ':' => !(has_drive && i == 1),
            '"' | '<' | '>' | '|' | '*' | '?' => true,
            _ => (c as u32) < 0x20,
        };
        if forbidden {
            return false;
        }
    }
    true
}

fn valid_unix(path: &str) -> bool {
    if path.contains('\0') {
        return false;
    }
    // One trailing separator is tolerated; a run of them is not.
    let bytes = path.as_bytes();
    !(bytes.len() >= 2 && bytes[bytes.len() - 1] == b'/' && bytes[bytes.len() - 2] == b'/')
}
