//! Rule-based pre-filter run before statistical scoring.
//!
//! Two passes over the words of cleaned input: a vote that can settle the
//! language outright from script and character evidence, and a candidate
//! filter narrowing the languages the scorer has to consider.

use std::collections::HashMap;

use unicode_script::{Script, UnicodeScript};

use crate::alphabet::Alphabet;
use crate::lang::Language;
use crate::lang::data::CHARS_TO_LANGUAGES;

/// Per-detector view of the configured languages consulted by the rules.
#[derive(Debug, Clone)]
pub(crate) struct RuleContext<'a> {
    pub languages: &'a [Language],
    pub single_language_alphabets: &'a HashMap<Alphabet, Language>,
    pub languages_with_unique_characters: &'a [Language],
}

#[inline(always)]
fn carries_unique_characters(c: char) -> bool {
    matches!(c.script(), Script::Latin | Script::Cyrillic | Script::Devanagari)
}

/// Entries sorted by count descending, ties by language order.
fn ranked(counts: &HashMap<Language, u32>) -> Vec<(Language, u32)> {
    let mut ranked: Vec<(Language, u32)> = counts.iter().map(|(&l, &c)| (l, c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

impl RuleContext<'_> {
    fn is_configured(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    fn count_word(&self, word: &str) -> HashMap<Language, u32> {
        let mut counts = HashMap::new();
        for c in word.chars() {
            if let Some((_, &language)) = self
                .single_language_alphabets
                .iter()
                .find(|(alphabet, _)| alphabet.matches_char(c))
            {
                *counts.entry(language).or_insert(0) += 1;
            } else if Alphabet::Han.matches_char(c) {
                *counts.entry(Language::Chinese).or_insert(0) += 1;
            } else if Alphabet::Hiragana.matches_char(c) || Alphabet::Katakana.matches_char(c) {
                *counts.entry(Language::Japanese).or_insert(0) += 1;
            } else if carries_unique_characters(c) {
                for &language in self.languages_with_unique_characters {
                    if language.unique_characters().contains(c) {
                        *counts.entry(language).or_insert(0) += 1;
                    }
                }
            }
        }
        counts
    }

    fn vote_of_word(&self, word: &str) -> Language {
        let counts = self.count_word(word);
        match counts.len() {
            0 => Language::Unknown,
            1 => {
                let language = counts.keys().next().copied().unwrap_or(Language::Unknown);
                if self.is_configured(language) { language } else { Language::Unknown }
            }
            _ if counts.contains_key(&Language::Chinese) && counts.contains_key(&Language::Japanese) => {
                Language::Japanese
            }
            _ => match ranked(&counts).as_slice() {
                [(first, first_count), (_, second_count), ..]
                    if first_count > second_count && self.is_configured(*first) =>
                {
                    *first
                }
                _ => Language::Unknown,
            },
        }
    }

    /// Language settled by script and unique-character evidence alone,
    /// or `None` when the statistics have to decide.
    pub fn detect_language_with_rules(&self, words: &[&str]) -> Option<Language> {
        let mut totals: HashMap<Language, u32> = HashMap::new();
        for word in words {
            *totals.entry(self.vote_of_word(word)).or_insert(0) += 1;
        }

        let half_word_count = words.len() as f64 * 0.5;
        if totals.get(&Language::Unknown).is_some_and(|&c| f64::from(c) < half_word_count) {
            totals.remove(&Language::Unknown);
        }

        let winner = match totals.len() {
            0 => Language::Unknown,
            1 => totals.keys().next().copied().unwrap_or(Language::Unknown),
            2 if totals.contains_key(&Language::Chinese) && totals.contains_key(&Language::Japanese) => {
                Language::Japanese
            }
            _ => match ranked(&totals).as_slice() {
                [(first, first_count), (_, second_count), ..] if first_count > second_count => *first,
                _ => Language::Unknown,
            },
        };
        (!winner.is_unknown()).then_some(winner)
    }

    /// Candidates sharing every diacritic cluster found in `word`.
    fn languages_confirmed_by(&self, word: &str, candidates: &[Language]) -> Vec<Language> {
        let mut hits = CHARS_TO_LANGUAGES
            .iter()
            .filter(|(characters, _)| word.chars().any(|c| characters.contains(c)))
            .map(|(_, languages)| *languages);
        let Some(first) = hits.next() else {
            return Vec::new();
        };
        let mut confirmed: Vec<Language> = first.iter().copied().filter(|l| candidates.contains(l)).collect();
        for languages in hits {
            confirmed.retain(|language| languages.contains(language));
        }
        confirmed
    }

    /// Configured languages that remain plausible for `words`.
    ///
    /// The dominant script selects the languages writing it; diacritic
    /// clusters confirmed by at least half of the words narrow the set
    /// further. May be empty when no configured language writes the script.
    pub fn filter_languages_by_rules(&self, words: &[&str]) -> Vec<Language> {
        let mut alphabet_counts: Vec<(Alphabet, u32)> = Vec::new();
        for word in words {
            if let Some(alphabet) = Alphabet::of_word(word) {
                match alphabet_counts.iter_mut().find(|(a, _)| *a == alphabet) {
                    Some((_, count)) => *count += 1,
                    None => alphabet_counts.push((alphabet, 1)),
                }
            }
        }

        let Some(&(first_alphabet, first_count)) = alphabet_counts.first() else {
            return self.languages.to_vec();
        };
        if alphabet_counts.len() > 1 && alphabet_counts.iter().all(|&(_, c)| c == first_count) {
            return self.languages.to_vec();
        }
        // Equal maxima fall back to catalogue order.
        let dominant = alphabet_counts
            .iter()
            .copied()
            .fold((first_alphabet, first_count), |best, (alphabet, count)| {
                if count > best.1 || (count == best.1 && alphabet < best.0) { (alphabet, count) } else { best }
            })
            .0;

        let filtered = dominant.supported_languages(self.languages);

        let mut language_counts: HashMap<Language, u32> = HashMap::new();
        for word in words {
            for language in self.languages_confirmed_by(word, &filtered) {
                *language_counts.entry(language).or_insert(0) += 1;
            }
        }

        let half_word_count = words.len() as f64 * 0.5;
        let subset: Vec<Language> = filtered
            .iter()
            .copied()
            .filter(|language| {
                language_counts.get(language).is_some_and(|&c| f64::from(c) >= half_word_count)
            })
            .collect();

        if subset.is_empty() { filtered } else { subset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::alphabets_supporting_single_language;

    struct Fixture {
        languages: Vec<Language>,
        single: HashMap<Alphabet, Language>,
        unique: Vec<Language>,
    }

    impl Fixture {
        fn new(languages: &[Language]) -> Self {
            Self {
                languages: languages.to_vec(),
                single: alphabets_supporting_single_language(languages),
                unique: languages.iter().copied().filter(|l| !l.unique_characters().is_empty()).collect(),
            }
        }

        fn all() -> Self {
            Self::new(Language::all())
        }

        fn context(&self) -> RuleContext<'_> {
            RuleContext {
                languages: &self.languages,
                single_language_alphabets: &self.single,
                languages_with_unique_characters: &self.unique,
            }
        }
    }

    fn rules(fixture: &Fixture, text: &str) -> Option<Language> {
        let words: Vec<&str> = text.split(' ').collect();
        fixture.context().detect_language_with_rules(&words)
    }

    fn filter(fixture: &Fixture, text: &str) -> Vec<Language> {
        let words: Vec<&str> = text.split(' ').collect();
        fixture.context().filter_languages_by_rules(&words)
    }

    #[test]
    fn single_script_words_settle_the_language() {
        let all = Fixture::all();
        assert_eq!(rules(&all, "ուսանող"), Some(Language::Armenian));
        assert_eq!(rules(&all, "ελληνικά"), Some(Language::Greek));
        assert_eq!(rules(&all, "한국어"), Some(Language::Korean));
        assert_eq!(rules(&all, "ひらがな"), Some(Language::Japanese));
        assert_eq!(rules(&all, "コーヒー"), Some(Language::Japanese));
        assert_eq!(rules(&all, "ქართული"), Some(Language::Georgian));
        assert_eq!(rules(&all, "ภาษาไทย"), Some(Language::Thai));
    }

    #[test]
    fn unique_characters_vote() {
        let all = Fixture::all();
        assert_eq!(rules(&all, "straße"), Some(Language::German));
        assert_eq!(rules(&all, "źdźbło ślązak"), Some(Language::Polish));
        assert_eq!(rules(&all, "ĉiuj"), Some(Language::Esperanto));
        assert_eq!(rules(&all, "їжак"), Some(Language::Ukrainian));
        assert_eq!(rules(&all, "house"), None);
        assert_eq!(rules(&all, "das straße"), None);
        assert_eq!(rules(&all, "pięć źdźbło"), None);
    }

    #[test]
    fn han_with_kana_is_japanese() {
        let all = Fixture::all();
        assert_eq!(rules(&all, "私"), Some(Language::Chinese));
        assert_eq!(rules(&all, "私は"), Some(Language::Japanese));
        assert_eq!(rules(&all, "私 は"), Some(Language::Japanese));
    }

    #[test]
    fn unconfigured_languages_never_win() {
        let pair = Fixture::new(&[Language::English, Language::French]);
        assert_eq!(rules(&pair, "straße"), None);
        assert_eq!(rules(&pair, "世界"), None);
        let cyrillic = Fixture::new(&[Language::English, Language::Russian]);
        assert_eq!(rules(&cyrillic, "дом"), Some(Language::Russian));
    }

    #[test]
    fn filter_by_dominant_script() {
        let all = Fixture::all();
        let cyrillic = filter(&all, "мы ты");
        assert_eq!(cyrillic, vec![Language::Belarusian, Language::Kazakh, Language::Mongolian, Language::Russian]);

        let han = filter(&all, "大 学");
        assert_eq!(han, vec![Language::Chinese, Language::Japanese]);

        let pair = Fixture::new(&[Language::English, Language::German]);
        assert!(filter(&pair, "ուսանող").is_empty());
    }

    #[test]
    fn tied_scripts_keep_every_language() {
        let all = Fixture::all();
        assert_eq!(filter(&all, "house дом").len(), 75);
        assert_eq!(filter(&all, "123").len(), 75);
    }

    #[test]
    fn diacritics_narrow_latin_candidates() {
        let all = Fixture::all();
        assert_eq!(filter(&all, "não"), vec![Language::Portuguese, Language::Vietnamese]);
        assert_eq!(
            filter(&all, "är bra"),
            vec![Language::Estonian, Language::Finnish, Language::German, Language::Slovak, Language::Swedish]
        );
        // A single hit among three words is below the half-word threshold.
        assert_eq!(filter(&all, "não the house").len(), 49);
    }

    #[test]
    fn clusters_within_a_word_intersect() {
        let all = Fixture::all();
        assert_eq!(filter(&all, "môžeš"), vec![Language::Slovak]);
        assert_eq!(filter(&all, "môžeš to"), vec![Language::Slovak]);
        assert_eq!(filter(&all, "ťažký"), vec![Language::Czech, Language::Slovak]);
        // Disjoint clusters confirm nothing, so the script filter stands.
        assert_eq!(filter(&all, "ãø").len(), 49);
    }
}
