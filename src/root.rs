//! Path root classification.
//!
//! The root of a path is the non-segment prefix that anchors it: a drive
//! specifier, a UNC head, or a leading separator. Classification is the
//! leaf dependency for directory-name extraction and ancestor testing, so
//! it yields only a kind and a byte length — no substring copies.
//!
//! In Windows-like mode the recognized forms, in priority order, are:
//! UNC (`\\server\share`), drive-absolute (`C:\`), drive-relative (`C:`),
//! rooted-without-drive (`\`), and relative. Unix-like mode knows only a
//! single leading `/`; a colon there is an ordinary character.
//!
//! # Examples
//!
//! ```
//! use pathmode::{PlatformMode, RootDescriptor, RootKind};
//!
//! let root = RootDescriptor::of(r"\\server\share\file.txt", PlatformMode::WindowsLike);
//! assert_eq!(root.kind(), RootKind::UncShare);
//! assert_eq!(root.as_str(r"\\server\share\file.txt"), r"\\server\share");
//!
//! let root = RootDescriptor::of(r"C:temp", PlatformMode::WindowsLike);
//! assert_eq!(root.kind(), RootKind::DriveRelative);
//! assert_eq!(root.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::mode::PlatformMode;

/// The recognized forms a path root can take.
///
/// The historical quirks (drive-relative `C:temp`, UNC server-only heads)
/// are encoded as explicit variants so the classifier's branching stays
/// auditable in isolation from the extractor and comparator logic built on
/// top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootKind {
    /// No root at all; the path is relative.
    Relative,
    /// A single leading separator with no drive, e.g. `\temp` or `/temp`.
    RootedNoDrive,
    /// Drive letter, colon, separator: `C:\temp`.
    DriveAbsolute,
    /// Drive letter and colon with no following separator: `C:temp` names
    /// a location relative to the current directory on that drive.
    DriveRelative,
    /// A UNC head naming only a server, e.g. `\\server` or `\\server\`.
    UncServerOnly,
    /// A UNC head extending through the share token, e.g. `\\server\share`.
    UncShare,
}

impl RootKind {
    /// Whether this is one of the UNC forms.
    #[must_use]
    pub const fn is_unc(self) -> bool {
        matches!(self, Self::UncServerOnly | Self::UncShare)
    }
}

/// A `(kind, length)` pair describing a path's root.
///
/// The length is a byte offset into the classified string, always landing
/// on a character boundary (roots end at ASCII characters). The descriptor
/// borrows nothing, so it can outlive the string it was derived from; pass
/// the same string back to [`as_str`](Self::as_str) to get the root text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootDescriptor {
    kind: RootKind,
    len: usize,
}

impl RootDescriptor {
    /// Classifies the root of `path` under the given mode.
    ///
    /// Repeated separators are never collapsed; extra separators inside a
    /// UNC head are absorbed into the root, and extra separators after any
    /// root become empty segments that later stages deal with.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmode::{PlatformMode, RootDescriptor, RootKind};
    ///
    /// let root = RootDescriptor::of("/temp", PlatformMode::UnixLike);
    /// assert_eq!(root.kind(), RootKind::RootedNoDrive);
    /// assert_eq!(root.len(), 1);
    ///
    /// // A colon is nothing special in Unix-like mode.
    /// let root = RootDescriptor::of(r"C:\temp", PlatformMode::UnixLike);
    /// assert_eq!(root.kind(), RootKind::Relative);
    /// ```
    #[must_use]
    pub fn of(path: &str, mode: PlatformMode) -> Self {
        let descriptor = match mode {
            PlatformMode::UnixLike => Self::unix(path),
            PlatformMode::WindowsLike => Self::windows(path),
        };
        log::trace!(
            "classified {path:?} ({mode}) as {:?} root of {} byte(s)",
            descriptor.kind,
            descriptor.len
        );
        descriptor
    }

    fn unix(path: &str) -> Self {
        if path.as_bytes().first() == Some(&b'/') {
            Self {
                kind: RootKind::RootedNoDrive,
                len: 1,
            }
        } else {
            Self {
                kind: RootKind::Relative,
                len: 0,
            }
        }
    }

    fn windows(path: &str) -> Self {
        let bytes = path.as_bytes();
        let len = bytes.len();

        if !bytes.is_empty() && is_windows_separator(bytes[0]) {
            if len < 2 || !is_windows_separator(bytes[1]) {
                // `\` or `\f`: a lone leading separator is the whole root.
                return Self {
                    kind: RootKind::RootedNoDrive,
                    len: 1,
                };
            }

            // UNC: the root runs through the share token if present,
            // otherwise through the server token, otherwise through the
            // leading separators alone.
            let mut i = skip_separators(bytes, 2);
            while i < len && !is_windows_separator(bytes[i]) {
                i += 1;
            }
            if i == len {
                return Self {
                    kind: RootKind::UncServerOnly,
                    len: i,
                };
            }
            let after_server = skip_separators(bytes, i);
            if after_server == len {
                return Self {
                    kind: RootKind::UncServerOnly,
                    len: after_server,
                };
            }
            let mut j = after_server;
            while j < len && !is_windows_separator(bytes[j]) {
                j += 1;
            }
            Self {
                kind: RootKind::UncShare,
                len: j,
            }
        } else if len >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
            if len >= 3 && is_windows_separator(bytes[2]) {
                Self {
                    kind: RootKind::DriveAbsolute,
                    len: 3,
                }
            } else {
                Self {
                    kind: RootKind::DriveRelative,
                    len: 2,
                }
            }
        } else {
            Self {
                kind: RootKind::Relative,
                len: 0,
            }
        }
    }

    /// The root form that was recognized.
    #[must_use]
    pub const fn kind(self) -> RootKind {
        self.kind
    }

    /// The root's length in bytes. Zero for relative paths.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Whether the path has no root (i.e. it is relative).
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The root text, sliced out of the path the descriptor was derived
    /// from.
    ///
    /// # Panics
    ///
    /// Panics if `path` is shorter than the recorded root length, which can
    /// only happen when a descriptor is applied to a different string than
    /// the one it classified.
    #[must_use]
    pub fn as_str(self, path: &'_ str) -> &'_ str {
        &path[..self.len]
    }

    /// Whether the path consists of the root alone and nothing more.
    #[must_use]
    pub fn covers(self, path: &str) -> bool {
        self.len == path.len()
    }
}

const fn is_windows_separator(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

fn skip_separators(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_windows_separator(bytes[i]) {
        i += 1;
    }
    i
}
