use crate::alphabet::Alphabet;
use crate::lang::LanguageEntry;

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates every language-indexed table from a single list
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $lang:ident, $name:literal,
        iso1: $iso1:ident $iso1_str:literal,
        iso3: $iso3:ident $iso3_str:literal,
        scripts: [ $($script:ident),+ $(,)? ],
        unique: $unique:literal
    ),* $(,)?) => {
        /// A supported natural language.
        ///
        /// `Unknown` is the sentinel for "no language could be determined";
        /// it is never part of [`Language::all`] nor of a detector's language set.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Language {
            $( $lang, )*
            Unknown,
        }

        /// ISO 639-1 two-letter codes of all supported languages.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum IsoCode639_1 {
            $( $iso1, )*
        }

        /// ISO 639-3 three-letter codes of all supported languages.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum IsoCode639_3 {
            $( $iso3, )*
        }

        // Indexed by `Language as usize`.
        pub(crate) static LANGUAGE_TABLE: &[LanguageEntry] = &[
            $(
                LanguageEntry {
                    language: Language::$lang,
                    name: $name,
                    display_name: stringify!($lang),
                    iso_639_1: IsoCode639_1::$iso1,
                    iso_639_3: IsoCode639_3::$iso3,
                    alphabets: &[$(Alphabet::$script),+],
                    unique_characters: $unique,
                },
            )*
        ];

        pub(crate) static ALL_LANGUAGES: &[Language] = &[$( Language::$lang ),*];

        pub(crate) static LANGUAGES_BY_NAME: Map<&'static str, Language> = phf_map! {
            $( $name => Language::$lang, )*
        };

        pub(crate) static ISO_639_1_BY_CODE: Map<&'static str, IsoCode639_1> = phf_map! {
            $( $iso1_str => IsoCode639_1::$iso1, )*
        };

        pub(crate) static ISO_639_3_BY_CODE: Map<&'static str, IsoCode639_3> = phf_map! {
            $( $iso3_str => IsoCode639_3::$iso3, )*
        };

        impl IsoCode639_1 {
            /// Lower-case code, e.g. `"de"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( IsoCode639_1::$iso1 => $iso1_str, )*
                }
            }

            pub const fn language(self) -> Language {
                match self {
                    $( IsoCode639_1::$iso1 => Language::$lang, )*
                }
            }
        }

        impl IsoCode639_3 {
            /// Lower-case code, e.g. `"deu"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( IsoCode639_3::$iso3 => $iso3_str, )*
                }
            }

            pub const fn language(self) -> Language {
                match self {
                    $( IsoCode639_3::$iso3 => Language::$lang, )*
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    The first script of every entry is the language's primary script.
//    `unique` lists characters no other supported language uses.
// ---------------------------------------------------------------------------
define_languages! {
    Afrikaans, "AFRIKAANS", iso1: AF "af", iso3: AFR "afr", scripts: [Latin], unique: "",
    Albanian, "ALBANIAN", iso1: SQ "sq", iso3: SQI "sqi", scripts: [Latin], unique: "",
    Arabic, "ARABIC", iso1: AR "ar", iso3: ARA "ara", scripts: [Arabic], unique: "",
    Armenian, "ARMENIAN", iso1: HY "hy", iso3: HYE "hye", scripts: [Armenian], unique: "",
    Azerbaijani, "AZERBAIJANI", iso1: AZ "az", iso3: AZE "aze", scripts: [Latin], unique: "Əə",
    Basque, "BASQUE", iso1: EU "eu", iso3: EUS "eus", scripts: [Latin], unique: "",
    Belarusian, "BELARUSIAN", iso1: BE "be", iso3: BEL "bel", scripts: [Cyrillic], unique: "",
    Bengali, "BENGALI", iso1: BN "bn", iso3: BEN "ben", scripts: [Bengali], unique: "",
    Bokmal, "BOKMAL", iso1: NB "nb", iso3: NOB "nob", scripts: [Latin], unique: "",
    Bosnian, "BOSNIAN", iso1: BS "bs", iso3: BOS "bos", scripts: [Latin], unique: "",
    Bulgarian, "BULGARIAN", iso1: BG "bg", iso3: BUL "bul", scripts: [Cyrillic], unique: "",
    Catalan, "CATALAN", iso1: CA "ca", iso3: CAT "cat", scripts: [Latin], unique: "Ïï",
    Chinese, "CHINESE", iso1: ZH "zh", iso3: ZHO "zho", scripts: [Han], unique: "",
    Croatian, "CROATIAN", iso1: HR "hr", iso3: HRV "hrv", scripts: [Latin], unique: "",
    Czech, "CZECH", iso1: CS "cs", iso3: CES "ces", scripts: [Latin], unique: "ĚěŘřŮů",
    Danish, "DANISH", iso1: DA "da", iso3: DAN "dan", scripts: [Latin], unique: "",
    Dutch, "DUTCH", iso1: NL "nl", iso3: NLD "nld", scripts: [Latin], unique: "",
    English, "ENGLISH", iso1: EN "en", iso3: ENG "eng", scripts: [Latin], unique: "",
    Esperanto, "ESPERANTO", iso1: EO "eo", iso3: EPO "epo", scripts: [Latin], unique: "ĈĉĜĝĤĥĴĵŜŝŬŭ",
    Estonian, "ESTONIAN", iso1: ET "et", iso3: EST "est", scripts: [Latin], unique: "",
    Finnish, "FINNISH", iso1: FI "fi", iso3: FIN "fin", scripts: [Latin], unique: "",
    French, "FRENCH", iso1: FR "fr", iso3: FRA "fra", scripts: [Latin], unique: "",
    Ganda, "GANDA", iso1: LG "lg", iso3: LUG "lug", scripts: [Latin], unique: "",
    Georgian, "GEORGIAN", iso1: KA "ka", iso3: KAT "kat", scripts: [Georgian], unique: "",
    German, "GERMAN", iso1: DE "de", iso3: DEU "deu", scripts: [Latin], unique: "ß",
    Greek, "GREEK", iso1: EL "el", iso3: ELL "ell", scripts: [Greek], unique: "",
    Gujarati, "GUJARATI", iso1: GU "gu", iso3: GUJ "guj", scripts: [Gujarati], unique: "",
    Hebrew, "HEBREW", iso1: HE "he", iso3: HEB "heb", scripts: [Hebrew], unique: "",
    Hindi, "HINDI", iso1: HI "hi", iso3: HIN "hin", scripts: [Devanagari], unique: "",
    Hungarian, "HUNGARIAN", iso1: HU "hu", iso3: HUN "hun", scripts: [Latin], unique: "ŐőŰű",
    Icelandic, "ICELANDIC", iso1: IS "is", iso3: ISL "isl", scripts: [Latin], unique: "",
    Indonesian, "INDONESIAN", iso1: ID "id", iso3: IND "ind", scripts: [Latin], unique: "",
    Irish, "IRISH", iso1: GA "ga", iso3: GLE "gle", scripts: [Latin], unique: "",
    Italian, "ITALIAN", iso1: IT "it", iso3: ITA "ita", scripts: [Latin], unique: "",
    Japanese, "JAPANESE", iso1: JA "ja", iso3: JPN "jpn", scripts: [Hiragana, Katakana, Han], unique: "",
    Kazakh, "KAZAKH", iso1: KK "kk", iso3: KAZ "kaz", scripts: [Cyrillic], unique: "ӘәҒғҚқҢңҰұ",
    Korean, "KOREAN", iso1: KO "ko", iso3: KOR "kor", scripts: [Hangul], unique: "",
    Latin, "LATIN", iso1: LA "la", iso3: LAT "lat", scripts: [Latin], unique: "",
    Latvian, "LATVIAN", iso1: LV "lv", iso3: LAV "lav", scripts: [Latin], unique: "ĢģĶķĻļŅņ",
    Lithuanian, "LITHUANIAN", iso1: LT "lt", iso3: LIT "lit", scripts: [Latin], unique: "ĖėĮįŲų",
    Macedonian, "MACEDONIAN", iso1: MK "mk", iso3: MKD "mkd", scripts: [Cyrillic], unique: "ЃѓЅѕЌќЏџ",
    Malay, "MALAY", iso1: MS "ms", iso3: MSA "msa", scripts: [Latin], unique: "",
    Maori, "MAORI", iso1: MI "mi", iso3: MRI "mri", scripts: [Latin], unique: "",
    Marathi, "MARATHI", iso1: MR "mr", iso3: MAR "mar", scripts: [Devanagari], unique: "ळ",
    Mongolian, "MONGOLIAN", iso1: MN "mn", iso3: MON "mon", scripts: [Cyrillic], unique: "ӨөҮү",
    Nynorsk, "NYNORSK", iso1: NN "nn", iso3: NNO "nno", scripts: [Latin], unique: "",
    Persian, "PERSIAN", iso1: FA "fa", iso3: FAS "fas", scripts: [Arabic], unique: "",
    Polish, "POLISH", iso1: PL "pl", iso3: POL "pol", scripts: [Latin], unique: "ŁłŃńŚśŹź",
    Portuguese, "PORTUGUESE", iso1: PT "pt", iso3: POR "por", scripts: [Latin], unique: "",
    Punjabi, "PUNJABI", iso1: PA "pa", iso3: PAN "pan", scripts: [Gurmukhi], unique: "",
    Romanian, "ROMANIAN", iso1: RO "ro", iso3: RON "ron", scripts: [Latin], unique: "Țţ",
    Russian, "RUSSIAN", iso1: RU "ru", iso3: RUS "rus", scripts: [Cyrillic], unique: "",
    Serbian, "SERBIAN", iso1: SR "sr", iso3: SRP "srp", scripts: [Cyrillic], unique: "ЂђЋћ",
    Shona, "SHONA", iso1: SN "sn", iso3: SNA "sna", scripts: [Latin], unique: "",
    Slovak, "SLOVAK", iso1: SK "sk", iso3: SLK "slk", scripts: [Latin], unique: "ĹĺĽľŔŕ",
    Slovene, "SLOVENE", iso1: SL "sl", iso3: SLV "slv", scripts: [Latin], unique: "",
    Somali, "SOMALI", iso1: SO "so", iso3: SOM "som", scripts: [Latin], unique: "",
    Sotho, "SOTHO", iso1: ST "st", iso3: SOT "sot", scripts: [Latin], unique: "",
    Spanish, "SPANISH", iso1: ES "es", iso3: SPA "spa", scripts: [Latin], unique: "¿¡",
    Swahili, "SWAHILI", iso1: SW "sw", iso3: SWA "swa", scripts: [Latin], unique: "",
    Swedish, "SWEDISH", iso1: SV "sv", iso3: SWE "swe", scripts: [Latin], unique: "",
    Tagalog, "TAGALOG", iso1: TL "tl", iso3: TGL "tgl", scripts: [Latin], unique: "",
    Tamil, "TAMIL", iso1: TA "ta", iso3: TAM "tam", scripts: [Tamil], unique: "",
    Telugu, "TELUGU", iso1: TE "te", iso3: TEL "tel", scripts: [Telugu], unique: "",
    Thai, "THAI", iso1: TH "th", iso3: THA "tha", scripts: [Thai], unique: "",
    Tsonga, "TSONGA", iso1: TS "ts", iso3: TSO "tso", scripts: [Latin], unique: "",
    Tswana, "TSWANA", iso1: TN "tn", iso3: TSN "tsn", scripts: [Latin], unique: "",
    Turkish, "TURKISH", iso1: TR "tr", iso3: TUR "tur", scripts: [Latin], unique: "",
    Ukrainian, "UKRAINIAN", iso1: UK "uk", iso3: UKR "ukr", scripts: [Cyrillic], unique: "ҐґЄєЇї",
    Urdu, "URDU", iso1: UR "ur", iso3: URD "urd", scripts: [Arabic], unique: "",
    Vietnamese, "VIETNAMESE", iso1: VI "vi", iso3: VIE "vie", scripts: [Latin],
        unique: "ẰằẦầẲẳẨẩẴẵẪẫẮắẤấẠạẶặẬậỀềẺẻỂểẼẽỄễẾếỆệỈỉĨĩỊịƠơỒồỜờỎỏỔổỞởỖỗỠỡỐốỚớỘộỢợƯưỪừỦủỬửŨũỮữỨứỤụỰựỲỳỶỷỸỹỴỵ",
    Welsh, "WELSH", iso1: CY "cy", iso3: CYM "cym", scripts: [Latin], unique: "",
    Xhosa, "XHOSA", iso1: XH "xh", iso3: XHO "xho", scripts: [Latin], unique: "",
    Yoruba, "YORUBA", iso1: YO "yo", iso3: YOR "yor", scripts: [Latin], unique: "ŌōṢṣ",
    Zulu, "ZULU", iso1: ZU "zu", iso3: ZUL "zul", scripts: [Latin], unique: "",
}

/// Languages no longer spoken natively. Editorial list, not derived.
pub(crate) static EXTINCT_LANGUAGES: &[Language] = &[Language::Latin];

/// Diacritics shared by a small cluster of languages. A word containing any
/// character of a key narrows the candidates to the listed languages.
pub(crate) static CHARS_TO_LANGUAGES: &[(&str, &[Language])] = {
    use Language::*;
    &[
        ("Ãã", &[Portuguese, Vietnamese]),
        ("ĄąĘę", &[Lithuanian, Polish]),
        ("Żż", &[Polish, Romanian]),
        ("Îî", &[French, Romanian]),
        ("Ññ", &[Basque, Spanish]),
        ("ŇňŤť", &[Czech, Slovak]),
        ("Ăă", &[Romanian, Vietnamese]),
        ("İıĞğ", &[Azerbaijani, Turkish]),
        ("ЈјЉљЊњ", &[Macedonian, Serbian]),
        ("ẸẹỌọ", &[Vietnamese, Yoruba]),
        ("ÐðÞþ", &[Icelandic, Turkish]),
        ("Ûû", &[French, Hungarian]),
        ("Ōō", &[Maori, Yoruba]),
        ("ĀāĒēĪī", &[Latvian, Maori, Yoruba]),
        ("Şş", &[Azerbaijani, Romanian, Turkish]),
        ("Ďď", &[Czech, Romanian, Slovak]),
        ("Ćć", &[Bosnian, Croatian, Polish]),
        ("Đđ", &[Bosnian, Croatian, Vietnamese]),
        ("Іі", &[Belarusian, Kazakh, Ukrainian]),
        ("Ìì", &[Italian, Vietnamese, Yoruba]),
        ("Øø", &[Bokmal, Danish, Nynorsk]),
        ("Ūū", &[Latvian, Lithuanian, Maori, Yoruba]),
        ("Ëë", &[Afrikaans, Albanian, Dutch, French]),
        ("ÈèÙù", &[French, Italian, Vietnamese, Yoruba]),
        ("Êê", &[Afrikaans, French, Portuguese, Vietnamese]),
        ("Õõ", &[Estonian, Hungarian, Portuguese, Vietnamese]),
        ("Ôô", &[French, Portuguese, Slovak, Vietnamese]),
        ("ЁёЫыЭэ", &[Belarusian, Kazakh, Mongolian, Russian]),
        ("ЩщЪъ", &[Bulgarian, Kazakh, Mongolian, Russian]),
        ("Òò", &[Catalan, Italian, Vietnamese, Yoruba]),
        ("Ææ", &[Bokmal, Danish, Icelandic, Nynorsk]),
        ("Åå", &[Bokmal, Danish, Nynorsk, Swedish]),
        ("Ýý", &[Czech, Icelandic, Slovak, Turkish, Vietnamese]),
        ("Ää", &[Estonian, Finnish, German, Slovak, Swedish]),
        ("Àà", &[Catalan, French, Italian, Portuguese, Vietnamese]),
        ("Ââ", &[French, Portuguese, Romanian, Turkish, Vietnamese]),
        ("Üü", &[Azerbaijani, Catalan, Estonian, German, Hungarian, Spanish, Turkish]),
        ("ČčŠšŽž", &[Bosnian, Czech, Croatian, Latvian, Lithuanian, Slovak, Slovene]),
        ("Çç", &[Albanian, Azerbaijani, Basque, Catalan, French, Portuguese, Turkish]),
        ("Öö", &[Azerbaijani, Estonian, Finnish, German, Hungarian, Icelandic, Swedish, Turkish]),
        (
            "Óó",
            &[Catalan, Hungarian, Icelandic, Irish, Polish, Portuguese, Slovak, Spanish, Vietnamese, Yoruba],
        ),
        (
            "ÁáÍíÚú",
            &[Catalan, Czech, Icelandic, Irish, Hungarian, Portuguese, Slovak, Spanish, Vietnamese, Yoruba],
        ),
        (
            "Éé",
            &[
                Catalan, Czech, French, Hungarian, Icelandic, Irish, Italian, Portuguese, Slovak,
                Spanish, Vietnamese, Yoruba,
            ],
        ),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        assert_eq!(LANGUAGE_TABLE.len(), 75);
        assert_eq!(ALL_LANGUAGES.len(), 75);
        for (i, entry) in LANGUAGE_TABLE.iter().enumerate() {
            assert_eq!(entry.language as usize, i, "{} out of place", entry.name);
            assert_eq!(ALL_LANGUAGES[i], entry.language);
        }
        assert_eq!(Language::Unknown as usize, LANGUAGE_TABLE.len());
    }

    #[test]
    fn names_are_upper_case_display_names() {
        for entry in LANGUAGE_TABLE {
            assert_eq!(entry.name, entry.display_name.to_uppercase());
            assert!(!entry.alphabets.is_empty());
        }
    }

    #[test]
    fn codes_are_unique_and_lower_case() {
        assert_eq!(ISO_639_1_BY_CODE.len(), 75);
        assert_eq!(ISO_639_3_BY_CODE.len(), 75);
        assert_eq!(LANGUAGES_BY_NAME.len(), 75);
        for entry in LANGUAGE_TABLE {
            let iso1 = entry.iso_639_1.as_str();
            let iso3 = entry.iso_639_3.as_str();
            assert_eq!(iso1.len(), 2);
            assert_eq!(iso3.len(), 3);
            assert_eq!(iso1, iso1.to_lowercase());
            assert_eq!(ISO_639_1_BY_CODE.get(iso1), Some(&entry.iso_639_1));
            assert_eq!(ISO_639_3_BY_CODE.get(iso3), Some(&entry.iso_639_3));
            assert_eq!(entry.iso_639_1.language(), entry.language);
            assert_eq!(entry.iso_639_3.language(), entry.language);
        }
    }

    #[test]
    fn unique_characters_are_unique() {
        for entry in LANGUAGE_TABLE {
            for c in entry.unique_characters.chars() {
                let owners = LANGUAGE_TABLE
                    .iter()
                    .filter(|other| other.unique_characters.contains(c))
                    .count();
                assert_eq!(owners, 1, "{c} claimed by several languages");
            }
        }
    }

    #[test]
    fn diacritic_clusters_name_several_languages() {
        for (chars, languages) in CHARS_TO_LANGUAGES {
            assert!(!chars.is_empty());
            assert!(languages.len() >= 2, "{chars} maps to a single language");
            for language in *languages {
                assert_ne!(*language, Language::Unknown);
            }
        }
    }
}
