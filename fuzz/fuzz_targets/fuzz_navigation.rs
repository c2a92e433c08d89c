#![no_main]

use libfuzzer_sys::fuzz_target;

use catpick::taxonomy::{from_json_str, NavigationPath};
use catpick::CategoryPicker;

const TAXONOMY: &str = r#"{
  "Media": {"id": "783", "Books": {"id": "784", "Fiction": {"id": "1001"}}, "Music": {"id": "855"}},
  "Software": {"id": "2092"}
}"#;

fuzz_target!(|data: &[u8]| {
    let Ok(path) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(taxonomy) = from_json_str(TAXONOMY) else {
        return;
    };

    // Any path renders; unresolved labels fall back to a valid level
    let path = NavigationPath::parse(path);
    let picker = CategoryPicker::new(&taxonomy).with_path(path.clone());
    let view = picker.render();
    assert!(view.resolved_depth <= view.depth);

    // A selection always lands on the full path
    if let Ok(selection) = CategoryPicker::new(&taxonomy).select_path(&path) {
        assert_eq!(selection.path, path);
    }
});
