#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathmode
//!
//! A platform-agnostic path-semantics engine: pure string logic for
//! classifying, decomposing, and comparing file-system paths under either
//! Windows or POSIX conventions, selected explicitly per call.
//!
//! Nothing here touches a filesystem or the process environment. That is
//! the point: a build tool running on one platform can reason correctly
//! about paths written for another, which rules out delegating to the
//! host's native path APIs. Paths are never normalized — `.` and `..`
//! segments and repeated separators are preserved exactly as written.
//!
//! ## Core Operations
//!
//! - [`directory_name`]: the parent-segment prefix of a path
//! - [`contains_path_component`]: whole-segment containment testing
//! - [`is_same_directory_or_child_of`]: ancestor/descendant testing
//! - [`is_valid_file_path`]: syntactic validity checking
//!
//! All four take an explicit [`PlatformMode`]. The shared classification
//! step is exposed as [`RootDescriptor`] and [`segments`].
//!
//! ## Examples
//!
//! ```
//! use pathmode::{directory_name, is_same_directory_or_child_of, PlatformMode};
//!
//! let windows = PlatformMode::WindowsLike;
//! assert_eq!(directory_name(r"C:\temp\goo.txt", windows), Some(r"C:\temp"));
//! assert_eq!(directory_name(r"C:\", windows), None);
//!
//! let unix = PlatformMode::UnixLike;
//! assert_eq!(directory_name("goo/temp/goo.txt", unix), Some("goo/temp"));
//!
//! assert!(is_same_directory_or_child_of(r"C:\ABCD\EFGH", r"C:\ABCD", windows));
//! assert!(!is_same_directory_or_child_of(r"C:\ABCDE", r"C:\ABCD", windows));
//! ```
//!
//! Every call is independent and side-effect free, so the whole crate is
//! trivially safe to use from any number of threads.

pub mod component;
pub mod dirname;
pub mod error;
pub mod mode;
pub mod relation;
pub mod root;
pub mod segments;
pub mod validity;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items at crate root for convenience
pub use component::contains_path_component;
pub use dirname::{directory_name, file_name};
pub use error::{Error, Result};
pub use mode::PlatformMode;
pub use relation::{is_same_directory_or_child_of, PathRelation};
pub use root::{RootDescriptor, RootKind};
pub use segments::{segments, Segments};
pub use validity::{is_valid_file_path, MAX_COMPONENT_LEN};
