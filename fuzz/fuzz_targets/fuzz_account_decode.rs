//! Fuzz target for account store decoding.
//!
//! Goal: decoding should **never panic** on any input. Every element of a JSON array ends up
//! either accepted or rejected, never both and never dropped.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_account_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(loaded) = acctscan_store::decode_accounts(text) else {
        return;
    };

    let indices: Vec<usize> = loaded.rejected.iter().map(|r| r.index).collect();
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
    if let Some(last) = indices.last() {
        assert!(*last < loaded.accounts.len() + loaded.rejected.len());
    }
});
