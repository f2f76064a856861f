//! Fuzz target for escaping.
//!
//! Checks that unescape inverts escape for any UTF-8 input.

#![no_main]

use dectable::{escape, unescape};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    assert_eq!(unescape(&escape(&text)), text);
});
