//! Per-language, per-order relative frequency tables.
//!
//! A model resource is a JSON document
//! `{"language": "GERMAN", "ngrams": {"3/100": "ab cd", ...}}` grouping the
//! ngrams of one order by their shared frequency fraction. Resources are
//! produced by an offline training step and read here through a
//! [`ModelSource`]; [`ModelCache`] shares the parsed tables process-wide.

pub mod cache;
pub mod source;

use std::collections::HashMap;
use std::io::{self, Read, Seek};

use serde::Deserialize;
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::lang::Language;
use crate::ngram::{Ngram, NgramError, NgramOrder};

pub use cache::{ModelCache, global_models};
pub use source::{DirectoryModelSource, InMemoryModelSource, ModelSource};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] ZipError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid frequency fraction {0:?}")]
    InvalidFraction(String),

    #[error("ngram {ngram:?} does not belong to the {order} table")]
    InvalidNgram { ngram: String, order: NgramOrder },

    #[error(transparent)]
    Ngram(#[from] NgramError),

    #[error("model for {found} was requested as {expected}")]
    LanguageMismatch { expected: Language, found: Language },

    #[error("no {order} model registered for {language}")]
    NotFound { language: Language, order: NgramOrder },
}

#[derive(Deserialize)]
struct JsonModel {
    language: Language,
    ngrams: HashMap<String, String>,
}

/// Immutable ngram → relative frequency map. Unseen ngrams are absent,
/// never stored as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NgramTable {
    frequencies: HashMap<Ngram, f64>,
}

impl NgramTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON model document, checking it describes `language`
    /// and holds ngrams of exactly `order` characters.
    pub fn from_json(language: Language, order: NgramOrder, json: &str) -> Result<Self, ModelError> {
        let model: JsonModel = serde_json::from_str(json)?;
        if model.language != language {
            return Err(ModelError::LanguageMismatch { expected: language, found: model.language });
        }
        let mut frequencies = HashMap::new();
        for (fraction, ngrams) in &model.ngrams {
            let frequency = parse_fraction(fraction)?;
            for ngram in ngrams.split(' ').filter(|s| !s.is_empty()) {
                let ngram = Ngram::try_new(ngram)?;
                if ngram.order() != Some(order) {
                    return Err(ModelError::InvalidNgram { ngram: ngram.to_string(), order });
                }
                frequencies.insert(ngram, frequency);
            }
        }
        Ok(Self { frequencies })
    }

    /// Reads the first entry of a zip archive as a JSON model document.
    pub fn from_archive<R: Read + Seek>(
        language: Language,
        order: NgramOrder,
        reader: R,
    ) -> Result<Self, ModelError> {
        let mut archive = ZipArchive::new(reader)?;
        let mut entry = archive.by_index(0)?;
        let mut json = String::with_capacity(entry.size() as usize);
        entry.read_to_string(&mut json)?;
        Self::from_json(language, order, &json)
    }

    #[inline]
    pub fn get(&self, ngram: &str) -> Option<f64> {
        self.frequencies.get(ngram).copied()
    }

    pub fn insert(&mut self, ngram: Ngram, frequency: f64) {
        self.frequencies.insert(ngram, frequency);
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for NgramTable {
    /// Panics on ngrams longer than five characters.
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            frequencies: iter
                .into_iter()
                .map(|(ngram, frequency)| (Ngram::new(ngram.as_ref()), frequency))
                .collect(),
        }
    }
}

/// `"numerator/denominator"` → `f64` in `(0, 1]`. Zero and improper
/// fractions are rejected along with zero denominators.
pub fn parse_fraction(fraction: &str) -> Result<f64, ModelError> {
    let invalid = || ModelError::InvalidFraction(fraction.to_owned());
    let (numerator, denominator) = fraction.split_once('/').ok_or_else(invalid)?;
    let numerator: u64 = numerator.trim().parse().map_err(|_| invalid())?;
    let denominator: u64 = denominator.trim().parse().map_err(|_| invalid())?;
    if numerator == 0 || numerator > denominator {
        return Err(invalid());
    }
    Ok(numerator as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GERMAN_BIGRAMS: &str = r#"{
        "language": "GERMAN",
        "ngrams": { "1/10": "ab cd", "3/100": "ef", "1/1": "gh" }
    }"#;

    #[test]
    fn fractions() {
        assert_eq!(parse_fraction("3/100").unwrap(), 0.03);
        assert_eq!(parse_fraction("1/1").unwrap(), 1.0);
        assert!(matches!(parse_fraction("1/0"), Err(ModelError::InvalidFraction(_))));
        assert!(matches!(parse_fraction("0.5"), Err(ModelError::InvalidFraction(_))));
        assert!(matches!(parse_fraction("a/b"), Err(ModelError::InvalidFraction(_))));
        assert!(matches!(parse_fraction("0/5"), Err(ModelError::InvalidFraction(_))));
        assert!(matches!(parse_fraction("3/2"), Err(ModelError::InvalidFraction(_))));
        assert!(matches!(parse_fraction("0/0"), Err(ModelError::InvalidFraction(_))));
    }

    #[test]
    fn out_of_range_frequencies_fail_the_document() {
        let json = r#"{"language": "GERMAN", "ngrams": {"0/5": "a", "3/2": "b"}}"#;
        let err = NgramTable::from_json(Language::German, NgramOrder::Unigram, json).unwrap_err();
        assert!(matches!(err, ModelError::InvalidFraction(_)), "{err}");
    }

    #[test]
    fn json_document_is_expanded_per_ngram() {
        let table = NgramTable::from_json(Language::German, NgramOrder::Bigram, GERMAN_BIGRAMS).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("ab"), Some(0.1));
        assert_eq!(table.get("cd"), Some(0.1));
        assert_eq!(table.get("ef"), Some(0.03));
        assert_eq!(table.get("gh"), Some(1.0));
        assert_eq!(table.get("zz"), None);
    }

    #[test]
    fn json_document_must_match_request() {
        let err = NgramTable::from_json(Language::English, NgramOrder::Bigram, GERMAN_BIGRAMS).unwrap_err();
        assert!(matches!(
            err,
            ModelError::LanguageMismatch { expected: Language::English, found: Language::German }
        ));

        let err = NgramTable::from_json(Language::German, NgramOrder::Trigram, GERMAN_BIGRAMS).unwrap_err();
        assert!(matches!(err, ModelError::InvalidNgram { order: NgramOrder::Trigram, .. }));

        let err = NgramTable::from_json(Language::German, NgramOrder::Bigram, "{").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn unknown_language_in_document_is_rejected() {
        let json = r#"{"language": "KLINGON", "ngrams": {}}"#;
        let err = NgramTable::from_json(Language::German, NgramOrder::Unigram, json).unwrap_err();
        assert!(err.to_string().contains("KLINGON"), "{err}");
    }

    #[test]
    fn table_from_pairs() {
        let table: NgramTable = [("a", 0.5), ("b", 0.25)].into_iter().collect();
        assert_eq!(table.get("a"), Some(0.5));
        assert!(!table.is_empty());
        assert!(NgramTable::new().is_empty());
    }
}
