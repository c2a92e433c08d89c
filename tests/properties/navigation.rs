//! Property tests for rendering and back/enter navigation.

use proptest::prelude::*;

use catpick::picker::{CategoryPicker, Choice, ItemKind, PickerState};
use catpick::taxonomy::NavigationPath;

use super::strategies::{label, taxonomy, taxonomy_and_leaf};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the root view lists the root categories in order, with
    /// leaf/branch kinds and no back control.
    #[test]
    fn property_root_view_matches_roots(taxonomy in taxonomy()) {
        let picker = CategoryPicker::new(&taxonomy);
        let view = picker.render();

        prop_assert!(view.header.is_none());
        prop_assert!(view.back.is_none());
        prop_assert_eq!(view.items.len(), taxonomy.roots().len());
        for (item, category) in view.items.iter().zip(taxonomy.roots()) {
            prop_assert_eq!(&item.label, &category.label);
            let expected = if category.is_leaf() { ItemKind::Leaf } else { ItemKind::Branch };
            prop_assert_eq!(item.kind, expected);
        }
    }

    /// PROPERTY: entering every branch on the way to a leaf and then going
    /// back the same number of times returns to the root view.
    #[test]
    fn property_back_undoes_enter((taxonomy, leaf) in taxonomy_and_leaf()) {
        let mut picker = CategoryPicker::new(&taxonomy);
        let root_view = picker.render();

        let (_, branches) = leaf.labels().split_last().unwrap();
        for (depth, label) in branches.iter().enumerate() {
            let choice = picker.choose(label).unwrap();
            prop_assert_eq!(choice, Choice::Entered { depth: depth + 1 });

            let view = picker.render();
            prop_assert_eq!(view.header.as_deref(), Some(label.as_str()));
            prop_assert!(view.back.is_some());
        }

        for _ in branches {
            prop_assert!(picker.back());
        }
        prop_assert!(!picker.back());
        prop_assert_eq!(picker.state(), PickerState::Browsing { depth: 0 });
        prop_assert_eq!(picker.render(), root_view);
    }

    /// PROPERTY: a path with an unknown label renders the deepest level that
    /// resolves, and the view still has a back control.
    #[test]
    fn property_unknown_label_degrades_to_valid_prefix(
        (taxonomy, leaf) in taxonomy_and_leaf(),
        cut in any::<prop::sample::Index>(),
        suffix in proptest::collection::vec(label(), 0..3),
    ) {
        let (_, branches) = leaf.labels().split_last().unwrap();
        let prefix = &branches[..cut.index(branches.len() + 1)];

        let mut labels: Vec<String> = prefix.to_vec();
        // '-' never appears in generated labels
        labels.push("No-such-category".to_string());
        labels.extend(suffix);
        let path = NavigationPath::from_labels(labels.clone());

        let picker = CategoryPicker::new(&taxonomy).with_path(path);
        let view = picker.render();

        prop_assert_eq!(view.resolved_depth, prefix.len());
        prop_assert_eq!(view.depth, labels.len());
        prop_assert!(view.back.is_some());

        let expected = taxonomy.resolve(&NavigationPath::from_labels(prefix.to_vec()));
        let expected_labels: Vec<&str> =
            expected.categories.iter().map(|c| c.label.as_str()).collect();
        prop_assert_eq!(view.labels(), expected_labels);
    }
}
