#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating arbitrary TOML must never panic
        if let Ok(config) = toml::from_str::<foldtree::Config>(content) {
            let _ = config.validate();
            let _ = config.separator();
        }
    }
});
