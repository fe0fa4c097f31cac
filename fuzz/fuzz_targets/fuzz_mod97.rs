#![no_main]

use libfuzzer_sys::fuzz_target;
use localflavor::core::checksum::{luhn_valid, mod97_10};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(r) = mod97_10(s) {
            assert!(r < 97);
        }
        let _ = luhn_valid(s);
    }
});
