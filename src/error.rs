//! Error types for the pathmode library.
//!
//! Malformed *paths* are never errors here — they degrade to `None` or
//! `false` results. The error type exists for precondition violations on
//! non-path arguments, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathmode error.
///
/// # Examples
///
/// ```
/// use pathmode::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the pathmode library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A component argument contained a path separator. Components name a
    /// single segment; a multi-segment needle has no defined meaning.
    #[error("component '{component}' contains a path separator")]
    SeparatorInComponent {
        /// The offending component argument.
        component: String,
    },

    /// A component argument was empty.
    #[error("component must be non-empty")]
    EmptyComponent,
}
