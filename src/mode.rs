//! Platform mode selection and per-mode path constants.
//!
//! Every operation in this crate takes a [`PlatformMode`] parameter instead
//! of consulting the host operating system. A build tool running on a POSIX
//! host can therefore reason about Windows project paths, and vice versa,
//! with identical results on every host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which platform's path conventions to apply.
///
/// The mode determines the accepted separator characters, the root grammar
/// (drive letters and UNC heads exist only in Windows-like mode), the
/// forbidden-character set, and the maximum path length.
///
/// # Examples
///
/// ```
/// use pathmode::PlatformMode;
///
/// let unix = PlatformMode::UnixLike;
/// let windows = PlatformMode::WindowsLike;
///
/// assert!(windows.is_separator('\\'));
/// assert!(!unix.is_separator('\\'));
/// assert!(unix.is_separator('/'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformMode {
    /// POSIX conventions: `/` is the only separator, almost any byte is
    /// legal in a file name.
    UnixLike,
    /// Windows conventions: both `/` and `\` separate segments, roots may
    /// name drives or UNC shares, and a number of characters are reserved.
    WindowsLike,
}

impl PlatformMode {
    /// Maximum path length accepted in Windows-like mode.
    pub const WINDOWS_MAX_PATH: usize = 260;

    /// Maximum path length accepted in Unix-like mode.
    pub const UNIX_MAX_PATH: usize = 4096;

    /// The canonical separator for this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmode::PlatformMode;
    ///
    /// assert_eq!(PlatformMode::UnixLike.primary_separator(), '/');
    /// assert_eq!(PlatformMode::WindowsLike.primary_separator(), '\\');
    /// ```
    #[must_use]
    pub const fn primary_separator(self) -> char {
        match self {
            Self::UnixLike => '/',
            Self::WindowsLike => '\\',
        }
    }

    /// Whether `c` separates path segments in this mode.
    ///
    /// Windows-like mode accepts both `/` and `\`; Unix-like mode accepts
    /// only `/` (a backslash is an ordinary file-name character there).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmode::PlatformMode;
    ///
    /// assert!(PlatformMode::WindowsLike.is_separator('/'));
    /// assert!(PlatformMode::WindowsLike.is_separator('\\'));
    /// assert!(!PlatformMode::UnixLike.is_separator('\\'));
    /// ```
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::UnixLike => c == '/',
            Self::WindowsLike => c == '/' || c == '\\',
        }
    }

    /// Byte-level variant of [`is_separator`](Self::is_separator).
    ///
    /// Separators are ASCII, so scanning a path's UTF-8 bytes for them is
    /// safe and avoids char decoding on the hot paths.
    pub(crate) const fn is_separator_byte(self, b: u8) -> bool {
        match self {
            Self::UnixLike => b == b'/',
            Self::WindowsLike => b == b'/' || b == b'\\',
        }
    }

    /// The maximum accepted path length, in bytes, for this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmode::PlatformMode;
    ///
    /// assert_eq!(PlatformMode::WindowsLike.max_path_len(), 260);
    /// assert_eq!(PlatformMode::UnixLike.max_path_len(), 4096);
    /// ```
    #[must_use]
    pub const fn max_path_len(self) -> usize {
        match self {
            Self::UnixLike => Self::UNIX_MAX_PATH,
            Self::WindowsLike => Self::WINDOWS_MAX_PATH,
        }
    }

    /// Parses a platform mode from a string.
    ///
    /// Recognizes "unix", "unix-like", "posix", "windows", and
    /// "windows-like" (case-insensitive). Intended for configuration layers
    /// that select the mode by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmode::PlatformMode;
    ///
    /// assert_eq!(PlatformMode::parse("posix").unwrap(), PlatformMode::UnixLike);
    /// assert_eq!(PlatformMode::parse("Windows").unwrap(), PlatformMode::WindowsLike);
    /// assert!(PlatformMode::parse("dos").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "unix" | "unix-like" | "posix" => Ok(Self::UnixLike),
            "windows" | "windows-like" => Ok(Self::WindowsLike),
            _ => Err(format!("invalid platform mode: {s}")),
        }
    }
}

impl fmt::Display for PlatformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnixLike => write!(f, "unix-like"),
            Self::WindowsLike => write!(f, "windows-like"),
        }
    }
}
