//! Fuzz target for the DMN decoder.
//!
//! This fuzzer tests that the decoder:
//! 1. Never panics on malformed input
//! 2. Produces tables that encode and decode back to themselves

#![no_main]

use dectable::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(document) = std::str::from_utf8(data) {
        if let Ok(table) = decode(document) {
            let reencoded = encode(&table);
            let again = decode(&reencoded).expect("encoded table must decode");
            assert_eq!(again, table);
        }
    }
});
