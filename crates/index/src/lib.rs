#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Membership index of package-owned paths
//!
//! The index is built once from the local database before any traversal
//! starts and stays read-only afterwards. Lookups are exact byte equality
//! of the root-relative path, so keys are `OsString` rather than
//! `PathBuf`: `Path` comparison collapses redundant separators, which
//! would make `usr/bin/` and `usr/bin` the same key.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

use xxhash_rust::xxh3::Xxh3Builder;

/// Set of all paths owned by installed packages, relative to the
/// installation root.
///
/// Lookups happen once per file encountered during a walk, at scales of
/// several hundred thousand entries, so the set uses the xxh3 build
/// hasher instead of the default SipHash.
#[derive(Debug, Clone, Default)]
pub struct TrackedPathSet {
    paths: HashSet<OsString, Xxh3Builder>,
}

impl TrackedPathSet {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index sized for roughly `capacity` paths.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: HashSet::with_capacity_and_hasher(capacity, Xxh3Builder::new()),
        }
    }

    /// Record a path as owned by some installed package.
    ///
    /// Duplicate insertions are idempotent; returns whether the path was
    /// newly inserted.
    pub fn insert(&mut self, path: impl Into<OsString>) -> bool {
        self.paths.insert(path.into())
    }

    /// Exact-match membership test against the recorded paths.
    #[must_use]
    pub fn contains(&self, path: impl AsRef<OsStr>) -> bool {
        self.paths.contains(path.as_ref())
    }

    /// Number of recorded paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no paths have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: Into<OsString>> Extend<P> for TrackedPathSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.paths.extend(iter.into_iter().map(Into::into));
    }
}

impl<P: Into<OsString>> FromIterator<P> for TrackedPathSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::Path;

    #[test]
    fn insert_then_contains() {
        let mut index = TrackedPathSet::new();
        assert!(index.insert("usr/bin/ls"));
        assert!(index.contains("usr/bin/ls"));
        assert!(!index.contains("usr/bin/cat"));
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut index = TrackedPathSet::new();
        assert!(index.insert("usr/bin/ls"));
        assert!(!index.insert("usr/bin/ls"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn lookup_by_borrowed_path() {
        let index: TrackedPathSet = ["usr/bin/ls", "etc/fstab"].into_iter().collect();
        assert!(index.contains(Path::new("usr/bin/ls")));
        assert!(index.contains(Path::new("etc").join("fstab")));
    }

    #[test]
    fn no_separator_normalization() {
        let mut index = TrackedPathSet::new();
        index.insert("usr/bin");
        assert!(!index.contains("usr/bin/"));
        assert!(!index.contains("usr//bin"));
        // directory entries from the database keep their trailing slash
        index.insert("usr/share/");
        assert!(!index.contains("usr/share"));
    }

    #[test]
    fn empty_index() {
        let index = TrackedPathSet::new();
        assert!(index.is_empty());
        assert!(!index.contains("anything"));
    }

    proptest! {
        #[test]
        fn contains_exactly_the_inserted_paths(
            paths in proptest::collection::hash_set("[a-z]{1,8}(/[a-z]{1,8}){0,3}", 0..64),
            probe in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        ) {
            let index: TrackedPathSet = paths.iter().cloned().collect();
            prop_assert_eq!(index.len(), paths.len());
            for path in &paths {
                prop_assert!(index.contains(path));
            }
            prop_assert_eq!(index.contains(&probe), paths.contains(&probe));
        }
    }
}
