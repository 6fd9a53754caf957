//! Property-based tests for destination resolution.
//!
//! Note: The normalize module already has light property tests for
//! normalization. This module runs the resolver against real directories.

use super::normalize::normalize_lexically;
use super::{ParentSource, PathResolver, ResolverConfig};
use proptest::prelude::*;
use std::path::PathBuf;
use tempfile::tempdir;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn extension_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("mp3"), Just("flac"), Just("mp4"), Just("mkv")].prop_map(String::from)
}

fn relative_dir_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..5)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // After resolving, the parent always exists and the path is parent/stem
    #[test]
    fn resolved_parent_always_exists(
        dir in relative_dir_strategy(),
        stem in path_component_strategy(),
        ext in extension_strategy(),
    ) {
        let root = tempdir().unwrap();
        let target = root.path().join(&dir).join(format!("{stem}.{ext}"));

        let resolved = PathResolver::default().resolve(&target).unwrap();

        prop_assert!(resolved.parent().is_dir());
        prop_assert_eq!(resolved.path(), root.path().join(&dir).join(&stem));
        prop_assert_eq!(resolved.source(), ParentSource::Explicit);
    }

    // Resolving the same target twice is stable and only creates once
    #[test]
    fn resolution_is_repeatable(
        dir in relative_dir_strategy(),
        stem in path_component_strategy(),
    ) {
        let root = tempdir().unwrap();
        let target = root.path().join(&dir).join(format!("{stem}.opus"));
        let resolver = PathResolver::default();

        let first = resolver.resolve(&target).unwrap();
        let second = resolver.resolve(&target).unwrap();

        prop_assert!(first.created_parent());
        prop_assert!(!second.created_parent());
        prop_assert_eq!(first.path(), second.path());
    }

    // Bare names always land directly in the preferred directory
    #[test]
    fn bare_names_use_preferred_directory(
        stem in path_component_strategy(),
        ext in extension_strategy(),
    ) {
        let root = tempdir().unwrap();
        let resolver = PathResolver::new(ResolverConfig::with_preferred_parent(root.path()));

        let resolved = resolver.resolve(&PathBuf::from(format!("{stem}.{ext}"))).unwrap();

        prop_assert_eq!(resolved.parent(), root.path());
        prop_assert_eq!(resolved.source(), ParentSource::Preferred);
    }

    // Absolute results are already normalized
    #[test]
    fn absolute_result_is_normalized(
        dir in relative_dir_strategy(),
        stem in path_component_strategy(),
    ) {
        let root = tempdir().unwrap();
        let target = root.path().join(&dir).join(".").join(format!("{stem}.wav"));

        let absolute = PathResolver::default().resolve(&target).unwrap().absolute().unwrap();

        prop_assert_eq!(absolute.clone(), normalize_lexically(&absolute));
        prop_assert!(absolute.is_absolute());
    }
}
