//! Taxonomy fixtures shared by the integration tests.

/// Two-level legacy JSON taxonomy
pub const ANIMALS_JSON: &str =
    r#"{"Animals": {"Dogs": {"id": "1"}, "Cats": {"id": "2"}}, "id": "0"}"#;

/// Three-level legacy JSON taxonomy with a mix of leaves and branches
pub const STORE_JSON: &str = r#"{
  "Media": {
    "id": "783",
    "Books": {
      "id": "784",
      "Fiction": {"id": "1001"},
      "Poetry": {"id": "1002"}
    },
    "Music": {"id": "855"}
  },
  "Software": {"id": "2092"}
}"#;

/// Excerpt of Google's `taxonomy-with-ids` text file
pub const GOOGLE_TXT: &str = "# Google_Product_Taxonomy_Version: 2021-09-21
1 - Animals & Pet Supplies
3237 - Animals & Pet Supplies > Live Animals
2 - Animals & Pet Supplies > Pet Supplies
3 - Animals & Pet Supplies > Pet Supplies > Bird Supplies
7385 - Animals & Pet Supplies > Pet Supplies > Bird Supplies > Bird Cage Accessories
166 - Apparel & Accessories
1604 - Apparel & Accessories > Clothing
";
