//! Statistical scorer: summed log-probabilities over n-gram orders one to
//! five, turned into confidences relative to the best candidate.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::alphabet::{Alphabet, alphabets_supporting_single_language};
use crate::confidence::ConfidenceValue;
use crate::lang::Language;
use crate::model::ModelCache;
use crate::ngram::{NgramOrder, distinct_ngrams, lower_order_chain};
use crate::rules::RuleContext;
use crate::unicode::{clean_up_input_text, contains_letter, split_text_into_words};

/// Immutable detector over a fixed set of at least two languages.
///
/// Built by [`LanguageDetectorBuilder`](crate::LanguageDetectorBuilder);
/// cheap to share across threads.
pub struct LanguageDetector {
    languages: Vec<Language>,
    minimum_relative_distance: f64,
    single_language_alphabets: HashMap<Alphabet, Language>,
    languages_with_unique_characters: Vec<Language>,
    models: Arc<ModelCache>,
}

impl LanguageDetector {
    /// `languages` must be sorted and duplicate-free.
    pub(crate) fn new(languages: Vec<Language>, minimum_relative_distance: f64, models: Arc<ModelCache>) -> Self {
        let single_language_alphabets = alphabets_supporting_single_language(&languages);
        let languages_with_unique_characters = languages
            .iter()
            .copied()
            .filter(|language| !language.unique_characters().is_empty())
            .collect();
        Self {
            languages,
            minimum_relative_distance,
            single_language_alphabets,
            languages_with_unique_characters,
            models,
        }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn minimum_relative_distance(&self) -> f64 {
        self.minimum_relative_distance
    }

    pub fn models(&self) -> &Arc<ModelCache> {
        &self.models
    }

    fn rules(&self) -> RuleContext<'_> {
        RuleContext {
            languages: &self.languages,
            single_language_alphabets: &self.single_language_alphabets,
            languages_with_unique_characters: &self.languages_with_unique_characters,
        }
    }

    /// Most likely language of `text`, or `None` when there is no evidence
    /// or the two best candidates are closer than the minimum relative
    /// distance.
    ///
    /// ```no_run
    /// use glossa::{Language, LanguageDetectorBuilder};
    ///
    /// let detector = LanguageDetectorBuilder::from_languages(&[Language::English, Language::German])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(detector.detect_language_of("languages are awesome"), Some(Language::English));
    /// ```
    pub fn detect_language_of(&self, text: &str) -> Option<Language> {
        let values = self.compute_language_confidence_values(text);
        match values.as_slice() {
            [] => None,
            [only] => Some(only.language()),
            [best, second, ..] => {
                (best.value() - second.value() >= self.minimum_relative_distance).then(|| best.language())
            }
        }
    }

    /// Confidence of every candidate with any statistical evidence, sorted
    /// by value descending. The first entry, if any, is `1.0`.
    pub fn compute_language_confidence_values(&self, text: &str) -> Vec<ConfidenceValue> {
        let cleaned = clean_up_input_text(text);
        if !contains_letter(&cleaned) {
            return Vec::new();
        }
        let words = split_text_into_words(&cleaned);
        let rules = self.rules();

        if let Some(language) = rules.detect_language_with_rules(&words) {
            trace!(%language, "language settled by rules");
            return vec![ConfidenceValue::new(language, 1.0)];
        }

        let candidates = rules.filter_languages_by_rules(&words);
        if let [language] = candidates.as_slice() {
            trace!(%language, "single candidate left by rules");
            return vec![ConfidenceValue::new(*language, 1.0)];
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        let unigram_count = distinct_ngrams(&cleaned, NgramOrder::Unigram).len();
        let mut totals: Vec<(Language, f64)> = candidates.iter().map(|&language| (language, 0.0)).collect();
        for order in NgramOrder::ALL {
            let ngrams = distinct_ngrams(&cleaned, order);
            if ngrams.is_empty() {
                continue;
            }
            for (language, total) in totals.iter_mut() {
                let sum = self.sum_of_ngram_probabilities(*language, &ngrams);
                if sum < 0.0 {
                    *total += sum;
                }
            }
        }

        // A zero total has no ratio against the best one. This also drops a
        // language matched only by ngrams of frequency 1.0.
        totals.retain(|&(_, total)| total != 0.0);
        if unigram_count > 0 {
            for (_, total) in totals.iter_mut() {
                *total /= unigram_count as f64;
            }
        }
        relative_confidences(totals)
    }

    /// Confidence of `language` for `text`; `0.0` when it is not a candidate.
    pub fn compute_language_confidence(&self, text: &str, language: Language) -> f64 {
        self.compute_language_confidence_values(text)
            .into_iter()
            .find(|value| value.language() == language)
            .map_or(0.0, |value| value.value())
    }

    /// Sum of `ln(frequency)` over `ngrams`, each resolved through its
    /// back-off chain. Ngrams unknown at every order contribute nothing.
    pub(crate) fn sum_of_ngram_probabilities(&self, language: Language, ngrams: &[&str]) -> f64 {
        ngrams
            .iter()
            .filter_map(|ngram| {
                lower_order_chain(ngram)
                    .into_iter()
                    .map(|prefix| self.lookup_ngram_probability(language, prefix))
                    .find(|&frequency| frequency > 0.0)
            })
            .map(f64::ln)
            .sum()
    }

    /// Frequency of `ngram` in its order's table, `0.0` when absent.
    ///
    /// # Panics
    ///
    /// On an empty ngram, which no back-off chain can produce.
    pub(crate) fn lookup_ngram_probability(&self, language: Language, ngram: &str) -> f64 {
        let order = match NgramOrder::from_len(ngram.chars().count()) {
            Some(order) => order,
            None if ngram.is_empty() => panic!("zerogram detected"),
            None => return 0.0,
        };
        self.models.table(language, order).get(ngram).unwrap_or(0.0)
    }
}

/// Best total over each total, sorted descending; ties keep catalogue order.
fn relative_confidences(totals: Vec<(Language, f64)>) -> Vec<ConfidenceValue> {
    let Some(best) = totals.iter().map(|&(_, total)| total).max_by(f64::total_cmp) else {
        return Vec::new();
    };
    let mut values: Vec<ConfidenceValue> = totals
        .into_iter()
        .map(|(language, total)| ConfidenceValue::new(language, best / total))
        .collect();
    values.sort_by(|a, b| {
        b.value()
            .partial_cmp(&a.value())
            .unwrap_or(Ordering::Equal)
            .then(a.language().cmp(&b.language()))
    });
    values
}

impl fmt::Debug for LanguageDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageDetector")
            .field("languages", &self.languages)
            .field("minimum_relative_distance", &self.minimum_relative_distance)
            .finish_non_exhaustive()
    }
}
