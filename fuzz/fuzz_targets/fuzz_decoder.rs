//! Fuzz testing for the table-file decoders.
//!
//! This fuzz target runs the header and record decoders over arbitrary byte
//! sequences to ensure malformed files produce errors, never panics or
//! out-of-bounds reads.

#![no_main]

use libfuzzer_sys::fuzz_target;

use dbf2sql::dbf::{decode_indexes, decode_records, decode_structure};
use dbf2sql::diag::Diagnostics;

fuzz_target!(|data: &[u8]| {
    let mut diag = Diagnostics::new();
    if let Ok(structure) = decode_structure(data, "fuzz", &mut diag) {
        if !structure.is_empty() {
            let _ = decode_records(data, &structure);
        }
    }
    let _ = decode_indexes(data);
});
