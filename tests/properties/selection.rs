//! Property tests for leaf selection and the output slots.

use proptest::prelude::*;

use catpick::picker::{CategoryPicker, PickerOptions, PickerState};
use catpick::taxonomy::DEFAULT_SEPARATOR;
use catpick::PickerError;

use super::strategies::taxonomy_and_leaf;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: clicking along a leaf's path fills every slot and closes
    /// the menu; the path slot joins the labels with the separator.
    #[test]
    fn property_leaf_selection_fills_slots((taxonomy, leaf) in taxonomy_and_leaf()) {
        let mut picker = CategoryPicker::new(&taxonomy);
        let selection = picker.select_path(&leaf).unwrap();

        let expected_id = taxonomy.get(&leaf).and_then(|c| c.node.id()).cloned();
        prop_assert_eq!(Some(selection.id.clone()), expected_id);
        prop_assert_eq!(&selection.path, &leaf);
        prop_assert_eq!(picker.state(), PickerState::Closed);

        let fields = picker.sink();
        prop_assert_eq!(fields.display.as_deref(), leaf.last());
        prop_assert_eq!(fields.category_id.as_ref(), Some(&selection.id));
        let joined = leaf.labels().join(DEFAULT_SEPARATOR);
        prop_assert_eq!(fields.category_path.as_deref(), Some(joined.as_str()));
        prop_assert!(!fields.menu_open);
    }

    /// PROPERTY: once closed, the picker refuses further choices until it
    /// is reset, and reset starts over at the root.
    #[test]
    fn property_closed_picker_rejects_choices((taxonomy, leaf) in taxonomy_and_leaf()) {
        let mut picker = CategoryPicker::new(&taxonomy);
        picker.select_path(&leaf).unwrap();

        let first = &taxonomy.roots()[0].label;
        prop_assert!(matches!(picker.choose(first), Err(PickerError::MenuClosed)));

        picker.reset();
        prop_assert_eq!(picker.state(), PickerState::Browsing { depth: 0 });
        prop_assert!(picker.path().is_empty());
    }

    /// PROPERTY: the configured separator is the only thing between labels.
    #[test]
    fn property_custom_separator((taxonomy, leaf) in taxonomy_and_leaf()) {
        let options = PickerOptions {
            separator: " | ".to_string(),
            ..PickerOptions::default()
        };
        let mut picker = CategoryPicker::new(&taxonomy).with_options(options);
        let selection = picker.select_path(&leaf).unwrap();

        let joined = leaf.labels().join(" | ");
        prop_assert_eq!(selection.path_string(" | "), joined.clone());
        prop_assert_eq!(picker.sink().category_path.as_deref(), Some(joined.as_str()));
    }
}
