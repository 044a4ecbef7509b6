//! Mandarin place-name transliteration.
//!
//! Built on the `pinyin` crate: every contiguous run of Han characters
//! becomes one capitalised word of joined pinyin syllables, while other
//! characters pass through unchanged and end the current word. The target
//! variant is fixed at construction; the English variant emits plain pinyin
//! and the German variant respells a fixed table of syllable initials with
//! traditional German transcription spellings.

use geostations_core::Transliterator;
use pinyin::ToPinyin;

/// German respellings of pinyin syllable initials, longest first so `zh`
/// wins over `z`.
const GERMAN_INITIALS: [(&str, &str); 8] = [
    ("zh", "dsch"),
    ("ch", "tsch"),
    ("sh", "sch"),
    ("x", "hs"),
    ("j", "dj"),
    ("r", "j"),
    ("z", "ds"),
    ("c", "ts"),
];

/// Target spelling convention for [`MandarinTransliterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    English,
    German,
}

/// Transliterates Chinese-script place names into Latin script.
///
/// # Examples
/// ```
/// use geostations_core::Transliterator;
/// use geostations_data::MandarinTransliterator;
///
/// let english = MandarinTransliterator::to_english();
/// assert_eq!(english.translate("北京"), "Beijing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandarinTransliterator {
    variant: Variant,
}

impl MandarinTransliterator {
    /// English-oriented pinyin spelling.
    #[must_use]
    pub const fn to_english() -> Self {
        Self {
            variant: Variant::English,
        }
    }

    /// German-oriented spelling of the same romanisation.
    #[must_use]
    pub const fn to_german() -> Self {
        Self {
            variant: Variant::German,
        }
    }

    fn spell(self, syllable: &str) -> String {
        match self.variant {
            Variant::English => syllable.to_owned(),
            Variant::German => GERMAN_INITIALS
                .iter()
                .find_map(|(initial, german)| {
                    syllable
                        .strip_prefix(initial)
                        .map(|rest| format!("{german}{rest}"))
                })
                .unwrap_or_else(|| syllable.to_owned()),
        }
    }
}

impl Transliterator for MandarinTransliterator {
    fn translate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word_open = false;
        for (character, syllable) in text.chars().zip(text.to_pinyin()) {
            match syllable {
                Some(syllable) => {
                    let spelled = self.spell(syllable.plain());
                    if word_open {
                        out.push_str(&spelled);
                    } else {
                        push_capitalised(&mut out, &spelled);
                        word_open = true;
                    }
                }
                None => {
                    word_open = false;
                    out.push(character);
                }
            }
        }
        out
    }
}

fn push_capitalised(out: &mut String, syllable: &str) {
    let mut chars = syllable.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
