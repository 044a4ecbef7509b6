//! Seam for the external transliteration engine.

/// Convert Chinese-script text into a Latin-script approximation.
///
/// Implementations are pure functions parameterised at construction time by
/// their target-language convention (e.g. English- or German-oriented
/// romanisation); the title builder only depends on this input/output shape.
/// `Send + Sync` keeps instances usable as process-wide configuration.
///
/// # Examples
/// ```
/// use geostations_core::Transliterator;
///
/// struct Reverse;
///
/// impl Transliterator for Reverse {
///     fn translate(&self, text: &str) -> String {
///         text.chars().rev().collect()
///     }
/// }
///
/// assert_eq!(Reverse.translate("abc"), "cba");
/// ```
pub trait Transliterator: Send + Sync {
    /// Return the Latin-script rendering of `text`.
    fn translate(&self, text: &str) -> String;
}
