//! Property tests for the legacy JSON codec and the Google text importer.

use proptest::prelude::*;

use catpick::taxonomy::{from_json_str, from_json_value, parse_google_taxonomy, to_json_value};

use super::strategies::{preorder, taxonomy, taxonomy_with_branch_ids};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: encoding then decoding the legacy JSON keeps labels, ids
    /// and child order.
    #[test]
    fn property_legacy_round_trip(taxonomy in taxonomy()) {
        let decoded = from_json_value(&to_json_value(&taxonomy)).unwrap();
        prop_assert_eq!(decoded, taxonomy);
    }

    /// PROPERTY: every line of a Google file is reachable at its path with
    /// its own id, and the rebuilt tree equals the source tree.
    #[test]
    fn property_google_import_rebuilds_tree(taxonomy in taxonomy_with_branch_ids()) {
        let mut text = String::from("# Google_Product_Taxonomy_Version: 2021-09-21\n");
        let categories = preorder(&taxonomy);
        for (path, category) in &categories {
            let id = category.node.id().unwrap();
            text.push_str(&format!("{} - {}\n", id, path));
        }

        let imported = parse_google_taxonomy(&text).unwrap();
        for (path, category) in &categories {
            let found = imported.get(path).unwrap();
            prop_assert_eq!(found.node.id(), category.node.id());
            prop_assert_eq!(found.is_leaf(), category.is_leaf());
        }
        prop_assert_eq!(imported, taxonomy);
    }

    /// PROPERTY: decoders never panic on arbitrary text.
    #[test]
    fn property_decoders_never_panic(s in "(?s).{0,256}") {
        let _ = from_json_str(&s);
        let _ = parse_google_taxonomy(&s);
    }
}
