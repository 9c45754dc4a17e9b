//! Unicode script catalogue used by the rule engine.
//!
//! Every [`Alphabet`] maps onto exactly one Unicode `Script` property value;
//! a text matches an alphabet only when **every** code point carries that
//! script. Characters of the `Common` / `Inherited` scripts (digits,
//! punctuation, combining marks shared across scripts) therefore never match,
//! with the kana prolonged sound mark counted as Katakana.

use std::collections::HashMap;

use unicode_script::{Script, UnicodeScript};

use crate::lang::Language;
use crate::unicode::is_prolonged_sound_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Alphabet {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Katakana,
    Latin,
    Tamil,
    Telugu,
    Thai,
}

impl Alphabet {
    /// All alphabets in catalogue order. Word classification picks the first
    /// alphabet of this list that covers the whole word.
    pub const ALL: [Alphabet; 18] = [
        Alphabet::Arabic,
        Alphabet::Armenian,
        Alphabet::Bengali,
        Alphabet::Cyrillic,
        Alphabet::Devanagari,
        Alphabet::Georgian,
        Alphabet::Greek,
        Alphabet::Gujarati,
        Alphabet::Gurmukhi,
        Alphabet::Han,
        Alphabet::Hangul,
        Alphabet::Hebrew,
        Alphabet::Hiragana,
        Alphabet::Katakana,
        Alphabet::Latin,
        Alphabet::Tamil,
        Alphabet::Telugu,
        Alphabet::Thai,
    ];

    #[inline(always)]
    const fn script(self) -> Script {
        match self {
            Alphabet::Arabic => Script::Arabic,
            Alphabet::Armenian => Script::Armenian,
            Alphabet::Bengali => Script::Bengali,
            Alphabet::Cyrillic => Script::Cyrillic,
            Alphabet::Devanagari => Script::Devanagari,
            Alphabet::Georgian => Script::Georgian,
            Alphabet::Greek => Script::Greek,
            Alphabet::Gujarati => Script::Gujarati,
            Alphabet::Gurmukhi => Script::Gurmukhi,
            Alphabet::Han => Script::Han,
            Alphabet::Hangul => Script::Hangul,
            Alphabet::Hebrew => Script::Hebrew,
            Alphabet::Hiragana => Script::Hiragana,
            Alphabet::Katakana => Script::Katakana,
            Alphabet::Latin => Script::Latin,
            Alphabet::Tamil => Script::Tamil,
            Alphabet::Telugu => Script::Telugu,
            Alphabet::Thai => Script::Thai,
        }
    }

    #[inline(always)]
    pub fn matches_char(self, c: char) -> bool {
        c.script() == self.script() || (self == Alphabet::Katakana && is_prolonged_sound_mark(c))
    }

    /// `true` iff `text` is non-empty and every code point belongs to this script.
    #[inline]
    pub fn matches(self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| self.matches_char(c))
    }

    /// First alphabet of [`Alphabet::ALL`] covering the whole word.
    pub fn of_word(word: &str) -> Option<Alphabet> {
        Alphabet::ALL.into_iter().find(|a| a.matches(word))
    }

    /// Those of `languages` that can be written in this script, in the
    /// order given.
    pub fn supported_languages(self, languages: &[Language]) -> Vec<Language> {
        languages.iter().copied().filter(|language| language.alphabets().contains(&self)).collect()
    }
}

/// Scripts written by exactly one of `languages`, mapped to that language.
///
/// Derived once per detector; a word written entirely in such a script
/// identifies its language without any statistics.
pub fn alphabets_supporting_single_language(languages: &[Language]) -> HashMap<Alphabet, Language> {
    let mut alphabets = HashMap::new();
    for alphabet in Alphabet::ALL {
        if let [language] = alphabet.supported_languages(languages).as_slice() {
            alphabets.insert(alphabet, *language);
        }
    }
    alphabets
}
