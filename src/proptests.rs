//! Cross-operation property tests.
//!
//! Run with `cargo test --features property-tests`.

use proptest::prelude::*;

use crate::{
    directory_name, is_same_directory_or_child_of, is_valid_file_path, segments, PlatformMode,
    RootDescriptor,
};

const MODES: [PlatformMode; 2] = [PlatformMode::UnixLike, PlatformMode::WindowsLike];

// Strategy to generate absolute Windows-like path strings
fn windows_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)
        .prop_map(|parts| format!(r"C:\{}", parts.join(r"\")))
}

proptest! {
    /// The root never extends past the end of the path, and slicing it
    /// back out of the path is always valid.
    #[test]
    fn root_length_bounded(s in any::<String>()) {
        for mode in MODES {
            let root = RootDescriptor::of(&s, mode);
            prop_assert!(root.len() <= s.len());
            prop_assert_eq!(root.as_str(&s).len(), root.len());
        }
    }

    /// No input makes any operation panic.
    #[test]
    fn no_panics_on_arbitrary_input(s in any::<String>(), t in any::<String>()) {
        for mode in MODES {
            let _ = directory_name(&s, mode);
            let _ = is_valid_file_path(&s, mode);
            let _ = is_same_directory_or_child_of(&s, &t, mode);
            let _ = segments(&s, mode).count();
        }
    }

    /// A relative single segment with no separators has the empty
    /// directory name.
    #[test]
    fn lone_segment_has_empty_directory(s in "[a-zA-Z0-9._-]{1,20}") {
        for mode in MODES {
            prop_assert_eq!(directory_name(&s, mode), Some(""));
        }
    }

    /// The directory name of an absolute path is always an ancestor of
    /// that path.
    #[test]
    fn directory_name_is_ancestor(s in windows_path_strategy()) {
        let mode = PlatformMode::WindowsLike;
        if let Some(parent) = directory_name(&s, mode) {
            prop_assert!(is_same_directory_or_child_of(&s, parent, mode));
        }
    }

    /// Repeatedly taking the directory name terminates at the root.
    #[test]
    fn directory_name_walk_terminates(s in windows_path_strategy()) {
        let mode = PlatformMode::WindowsLike;
        let mut current = s.as_str();
        let mut steps = 0;
        while let Some(parent) = directory_name(current, mode) {
            prop_assert!(parent.len() < current.len());
            current = parent;
            steps += 1;
            prop_assert!(steps <= s.len());
        }
    }

    /// Segmentation reads the path without rewriting it: every yielded
    /// segment is a contiguous slice of the input and contains no
    /// separator.
    #[test]
    fn segments_are_slices(s in any::<String>()) {
        for mode in MODES {
            for segment in segments(&s, mode) {
                prop_assert!(!segment.is_empty());
                prop_assert!(!segment.chars().any(|c| mode.is_separator(c)));
                prop_assert!(s.contains(segment));
            }
        }
    }

    /// Paths longer than the mode's limit are never valid.
    #[test]
    fn oversized_paths_invalid(extra in 1usize..100) {
        for mode in MODES {
            let path = "a/".repeat((mode.max_path_len() + extra) / 2 + 1);
            prop_assert!(path.len() > mode.max_path_len());
            prop_assert!(!is_valid_file_path(&path, mode));
        }
    }
}
