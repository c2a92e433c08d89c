#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(taxonomy) = catpick::parse_google_taxonomy(content) {
            let _ = taxonomy.leaves();
        }
    }
});
