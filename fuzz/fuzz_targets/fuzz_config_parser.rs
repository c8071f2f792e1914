//! Fuzz target for `acctscan.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic**. Any config that resolves must have a
//! usable failed-attempt threshold.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = acctscan_settings::parse_config_toml(text) else {
        return;
    };
    if let Ok(resolved) = acctscan_settings::resolve_config(cfg, Default::default()) {
        assert!(resolved.rules.max_failed_attempts >= 1);
        assert!(acctscan_settings::PROFILES.contains(&resolved.profile.as_str()));
    }
});
