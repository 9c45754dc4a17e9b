//! Text clean-up and word splitting shared by the rule engine and the scorer.

use std::sync::LazyLock;

use regex::Regex;
use unicode_script::{Script, UnicodeScript};

static PUNCTUATION_OR_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{N}]").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Letters plus the combining vowel signs of abugidas, which carry the
/// Alphabetic property without being `\p{L}`.
#[inline(always)]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// `ー` and its half-width form. Script `Common`, but only ever written
/// inside kana words.
#[inline(always)]
pub fn is_prolonged_sound_mark(c: char) -> bool {
    matches!(c, '\u{30FC}' | '\u{FF70}')
}

/// Han, Hiragana and Katakana code points. Each one is a word of its own.
#[inline(always)]
pub fn is_logogram(c: char) -> bool {
    matches!(c.script(), Script::Han | Script::Hiragana | Script::Katakana) || is_prolonged_sound_mark(c)
}

#[inline]
pub fn contains_letter(text: &str) -> bool {
    text.chars().any(is_letter)
}

/// Lower-cases `text`, removes punctuation and digits and collapses
/// whitespace runs to a single space.
///
/// ```
/// use glossa::unicode::clean_up_input_text;
/// assert_eq!(clean_up_input_text("  Hello,   World 42! "), "hello world");
/// ```
pub fn clean_up_input_text(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = PUNCTUATION_OR_NUMBER.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_owned()
}

/// Splits cleaned text on spaces; every logogram becomes a one-character word
/// regardless of surrounding whitespace.
pub fn split_text_into_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if c == ' ' || is_logogram(c) {
            if let Some(s) = start.take() {
                words.push(&text[s..i]);
            }
            if c != ' ' {
                words.push(&text[i..i + c.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push(&text[s..]);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_up_removes_numbers_and_punctuation() {
        let text = "Weltweit    gibt es ungefähr 6.000 Sprachen,\n wobei laut Schätzungen zufolge ungefähr 90  Prozent davon\n am Ende dieses Jahrhunderts verdrängt sein werden.";
        assert_eq!(
            clean_up_input_text(text),
            "weltweit gibt es ungefähr sprachen wobei laut schätzungen zufolge ungefähr prozent davon am ende dieses jahrhunderts verdrängt sein werden"
        );
    }

    #[test]
    fn clean_up_of_noise_is_empty() {
        assert_eq!(clean_up_input_text(""), "");
        assert_eq!(clean_up_input_text(" \n  \t;"), "");
        assert_eq!(clean_up_input_text("3<856%)§"), "<");
        assert!(!contains_letter(&clean_up_input_text("3<856%)§")));
    }

    #[test]
    fn words_split_on_spaces() {
        assert_eq!(split_text_into_words("this is a sentence"), vec!["this", "is", "a", "sentence"]);
        assert_eq!(split_text_into_words("sentence"), vec!["sentence"]);
        assert!(split_text_into_words("").is_empty());
    }

    #[test]
    fn logograms_are_single_words() {
        assert_eq!(
            split_text_into_words("上海大学是一个好大学 this is a sentence"),
            vec!["上", "海", "大", "学", "是", "一", "个", "好", "大", "学", "this", "is", "a", "sentence"]
        );
        assert_eq!(split_text_into_words("abcこんdef"), vec!["abc", "こ", "ん", "def"]);
        assert_eq!(split_text_into_words("コーヒー"), vec!["コ", "ー", "ヒ", "ー"]);
        // Hangul is an alphabet, not a logographic script.
        assert_eq!(split_text_into_words("한국어 문장"), vec!["한국어", "문장"]);
    }

    #[test]
    fn letters() {
        assert!(is_letter('a'));
        assert!(is_letter('ß'));
        assert!(is_letter('学'));
        assert!(!is_letter('3'));
        assert!(!is_letter(' '));
        assert!(!is_letter('<'));
    }
}
