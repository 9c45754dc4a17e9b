pub(crate) mod data;

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::alphabet::Alphabet;
pub use data::{IsoCode639_1, IsoCode639_3, Language};
use data::{
    ALL_LANGUAGES, EXTINCT_LANGUAGES, ISO_639_1_BY_CODE, ISO_639_3_BY_CODE, LANGUAGE_TABLE,
    LANGUAGES_BY_NAME,
};

#[derive(Clone, Copy, Debug)]
pub(crate) struct LanguageEntry {
    pub language: Language,
    pub name: &'static str,
    pub display_name: &'static str,
    pub iso_639_1: IsoCode639_1,
    pub iso_639_3: IsoCode639_3,
    pub alphabets: &'static [Alphabet],
    pub unique_characters: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language name: {0:?}")]
pub struct ParseLanguageError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ISO 639-{standard} code: {code:?}")]
pub struct ParseIsoCodeError {
    pub standard: u8,
    pub code: String,
}

macro_rules! languages_with_primary_script {
    ($($script:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Languages whose primary script is " $script "."]
                pub fn [<all_with_ $script:lower _script>]() -> Vec<Language> {
                    Self::with_primary_script(Alphabet::$script)
                }
            )*
        }
    };
}

impl Language {
    #[inline(always)]
    fn entry(self) -> Option<&'static LanguageEntry> {
        LANGUAGE_TABLE.get(self as usize)
    }

    /// Every supported language in catalogue order. Never contains `Unknown`.
    #[inline(always)]
    pub fn all() -> &'static [Language] {
        ALL_LANGUAGES
    }

    pub fn all_spoken_languages() -> Vec<Language> {
        ALL_LANGUAGES
            .iter()
            .copied()
            .filter(|language| !EXTINCT_LANGUAGES.contains(language))
            .collect()
    }

    languages_with_primary_script!(Arabic, Cyrillic, Devanagari, Latin);

    fn with_primary_script(alphabet: Alphabet) -> Vec<Language> {
        ALL_LANGUAGES
            .iter()
            .copied()
            .filter(|language| language.alphabets().first() == Some(&alphabet))
            .collect()
    }

    /// Upper-case name used in model files and serialized configuration.
    pub fn name(self) -> &'static str {
        self.entry().map_or("UNKNOWN", |e| e.name)
    }

    /// Scripts this language is written in, primary script first.
    #[inline]
    pub fn alphabets(self) -> &'static [Alphabet] {
        self.entry().map_or(&[], |e| e.alphabets)
    }

    #[inline]
    pub fn unique_characters(self) -> &'static str {
        self.entry().map_or("", |e| e.unique_characters)
    }

    pub fn iso_code_639_1(self) -> Option<IsoCode639_1> {
        self.entry().map(|e| e.iso_639_1)
    }

    pub fn iso_code_639_3(self) -> Option<IsoCode639_3> {
        self.entry().map(|e| e.iso_639_3)
    }

    #[inline]
    pub const fn from_iso_code_639_1(code: IsoCode639_1) -> Language {
        code.language()
    }

    #[inline]
    pub const fn from_iso_code_639_3(code: IsoCode639_3) -> Language {
        code.language()
    }

    #[inline(always)]
    pub fn is_unknown(self) -> bool {
        self == Language::Unknown
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().map_or("Unknown", |e| e.display_name))
    }
}

/// Accepts the upper-case catalogue name in any letter case.
/// `Unknown` is not a parseable language.
impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGES_BY_NAME
            .get(s.trim().to_uppercase().as_str())
            .copied()
            .ok_or_else(|| ParseLanguageError(s.to_owned()))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct LanguageVisitor;

impl Visitor<'_> for LanguageVisitor {
    type Value = Language;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an upper-case language name such as \"GERMAN\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Language, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(LanguageVisitor)
    }
}

// ───────────────────────────── ISO codes ─────────────────────────────

impl fmt::Display for IsoCode639_1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IsoCode639_3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IsoCode639_1 {
    type Err = ParseIsoCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ISO_639_1_BY_CODE
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseIsoCodeError { standard: 1, code: s.to_owned() })
    }
}

impl FromStr for IsoCode639_3 {
    type Err = ParseIsoCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ISO_639_3_BY_CODE
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseIsoCodeError { standard: 3, code: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_codes_round_trip() {
        for &language in Language::all() {
            let iso1 = language.iso_code_639_1().unwrap();
            let iso3 = language.iso_code_639_3().unwrap();
            assert_eq!(Language::from_iso_code_639_1(iso1), language);
            assert_eq!(Language::from_iso_code_639_3(iso3), language);
            assert_eq!(iso1.to_string().parse::<IsoCode639_1>(), Ok(iso1));
            assert_eq!(iso3.to_string().parse::<IsoCode639_3>(), Ok(iso3));
        }
        assert_eq!(Language::Unknown.iso_code_639_1(), None);
    }

    #[test]
    fn iso_code_parsing_is_case_insensitive() {
        assert_eq!("DE".parse::<IsoCode639_1>(), Ok(IsoCode639_1::DE));
        assert_eq!("Deu".parse::<IsoCode639_3>(), Ok(IsoCode639_3::DEU));
        let err = "xx".parse::<IsoCode639_1>().unwrap_err();
        assert_eq!(err.to_string(), "unknown ISO 639-1 code: \"xx\"");
    }

    #[test]
    fn display_and_name() {
        assert_eq!(Language::German.to_string(), "German");
        assert_eq!(Language::German.name(), "GERMAN");
        assert_eq!(Language::Unknown.to_string(), "Unknown");
        assert_eq!(Language::Unknown.name(), "UNKNOWN");
        assert_eq!(IsoCode639_1::DE.to_string(), "de");
        assert_eq!(IsoCode639_3::DEU.to_string(), "deu");
    }

    #[test]
    fn parse_names() {
        assert_eq!("GERMAN".parse::<Language>(), Ok(Language::German));
        assert_eq!("german".parse::<Language>(), Ok(Language::German));
        assert!("UNKNOWN".parse::<Language>().is_err());
        assert!("Klingon".parse::<Language>().is_err());
    }

    #[test]
    fn catalogue_filters() {
        assert_eq!(Language::all().len(), 75);
        let spoken = Language::all_spoken_languages();
        assert_eq!(spoken.len(), 74);
        assert!(!spoken.contains(&Language::Latin));

        assert_eq!(
            Language::all_with_arabic_script(),
            vec![Language::Arabic, Language::Persian, Language::Urdu]
        );
        assert_eq!(
            Language::all_with_devanagari_script(),
            vec![Language::Hindi, Language::Marathi]
        );
        assert_eq!(Language::all_with_cyrillic_script().len(), 8);
        assert_eq!(Language::all_with_latin_script().len(), 49);
        assert!(!Language::all().contains(&Language::Unknown));
    }

    #[test]
    fn unique_characters_and_scripts() {
        assert_eq!(Language::German.unique_characters(), "ß");
        assert_eq!(Language::English.unique_characters(), "");
        assert_eq!(
            Language::Japanese.alphabets(),
            &[Alphabet::Hiragana, Alphabet::Katakana, Alphabet::Han]
        );
        assert!(Language::Unknown.alphabets().is_empty());
    }
}
