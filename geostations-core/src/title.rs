//! Bilingual title derivation.
//!
//! Titles are computed fresh per feature and per output call; nothing is
//! cached across features.

use crate::encoding::{EncodingRepairError, repair_double_decoded};
use crate::feature::{Feature, ZH_NAME};
use crate::transliterate::Transliterator;

/// Title emitted when a feature carries no Chinese name attribute.
pub const NO_NAME_FALLBACK: &str = "No Name found.";

/// Build the bilingual title for one feature.
///
/// Looks up the [`ZH_NAME`](crate::ZH_NAME) attribute by identity. When
/// present, the defect-encoded value is repaired, transliterated, and
/// rendered as `"<transliterated> (<repaired>)"`; when absent, the literal
/// [`NO_NAME_FALLBACK`] is returned.
///
/// # Errors
/// Propagates [`EncodingRepairError`] from the repair step; an unrepairable
/// name is a fatal defect, not a per-record condition.
pub fn build_title(
    transliterator: &dyn Transliterator,
    feature: &Feature,
) -> Result<String, EncodingRepairError> {
    let Some(raw) = feature.attribute(&ZH_NAME) else {
        return Ok(NO_NAME_FALLBACK.to_owned());
    };
    let repaired = repair_double_decoded(raw)?;
    let translated = transliterator.translate(&repaired);
    Ok(format!("{translated} ({repaired})"))
}
