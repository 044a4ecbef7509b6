//! Round-trip law for the double-decoding repair.

use geostations_core::repair_double_decoded;
use proptest::prelude::*;

/// Re-decode a string's UTF-8 bytes one character per byte, reproducing the
/// upstream defect.
fn mangle(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

proptest! {
    /// Any valid string survives mangling followed by repair unchanged.
    #[test]
    fn mangle_then_repair_is_identity(original in ".*") {
        let repaired = repair_double_decoded(&mangle(&original));
        prop_assert_eq!(repaired, Ok(original));
    }

    /// Repair never panics, whatever the input.
    #[test]
    fn repair_is_total(input in ".*") {
        let _ = repair_double_decoded(&input);
    }
}
