//! Repair of double-decoded attribute text.
//!
//! The upstream dataset decoded UTF-8 bytes as if they were single-byte
//! characters, so every original byte surfaced as one code point in
//! `U+0000..=U+00FF`. [`repair_double_decoded`] reverses that defect: each
//! character is mapped back to its byte and the byte sequence is re-decoded
//! as strict UTF-8. Failures are fatal configuration defects; the assumption
//! is that every affected record shares the same mis-encoding, so a single
//! invalid sequence aborts the run rather than skipping the record.

use encoding_rs::UTF_8;
use thiserror::Error;

/// Errors raised while reversing the double-decoding defect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingRepairError {
    /// The input contained a character outside the one-byte range, so it
    /// cannot have come from a byte-per-character decode.
    #[error("character {character:?} at byte offset {offset} is outside the single-byte range")]
    NotSingleByte {
        /// Offending character.
        character: char,
        /// Byte offset of the character within the input.
        offset: usize,
    },
    /// The recovered byte sequence is not valid UTF-8.
    #[error("re-encoded bytes are not valid UTF-8: {bytes:02x?}")]
    InvalidUtf8 {
        /// The recovered byte sequence.
        bytes: Vec<u8>,
    },
}

/// Reverse a one-byte-per-character decode of UTF-8 text.
///
/// Each input character in `U+0000..=U+00FF` maps bijectively back to one
/// byte; the byte sequence is then decoded as UTF-8 without replacement.
/// Apply exactly once: repairing an already-correct string is out of
/// contract and may corrupt it.
///
/// # Errors
/// Returns [`EncodingRepairError::NotSingleByte`] for characters above
/// `U+00FF` and [`EncodingRepairError::InvalidUtf8`] when the recovered
/// bytes are not valid UTF-8.
///
/// # Examples
/// ```
/// use geostations_core::repair_double_decoded;
///
/// let mangled: String = "北京".bytes().map(char::from).collect();
/// assert_eq!(repair_double_decoded(&mangled).unwrap(), "北京");
/// ```
pub fn repair_double_decoded(raw: &str) -> Result<String, EncodingRepairError> {
    let mut bytes = Vec::with_capacity(raw.len());
    for (offset, character) in raw.char_indices() {
        let byte = u8::try_from(u32::from(character))
            .map_err(|_| EncodingRepairError::NotSingleByte { character, offset })?;
        bytes.push(byte);
    }
    UTF_8
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(std::borrow::Cow::into_owned)
        .ok_or(EncodingRepairError::InvalidUtf8 { bytes })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn mangle(text: &str) -> String {
        text.bytes().map(char::from).collect()
    }

    #[rstest]
    #[case("北京")]
    #[case("乌鲁木齐")]
    #[case("Station 7")]
    #[case("")]
    fn repairs_mangled_utf8(#[case] original: &str) {
        assert_eq!(
            repair_double_decoded(&mangle(original)).expect("repair"),
            original
        );
    }

    #[rstest]
    fn rejects_characters_above_one_byte() {
        let err = repair_double_decoded("已修").expect_err("out-of-range character");
        assert!(matches!(
            err,
            EncodingRepairError::NotSingleByte {
                character: '已',
                offset: 0,
            }
        ));
    }

    #[rstest]
    fn rejects_invalid_byte_sequences() {
        // 0xFF can never start a UTF-8 sequence.
        let err = repair_double_decoded("\u{ff}").expect_err("invalid sequence");
        assert_eq!(err, EncodingRepairError::InvalidUtf8 { bytes: vec![0xFF] });
    }
}
