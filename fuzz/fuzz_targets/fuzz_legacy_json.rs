#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Malformed entries are skipped, never a panic
        if let Ok(taxonomy) = catpick::taxonomy::from_json_str(content) {
            let _ = catpick::taxonomy::to_json_string(&taxonomy);
        }
        let _ = catpick::taxonomy::from_script_str(content);
    }
});
