//! N-gram value type, back-off chains and test-text extraction.

use std::borrow::Borrow;
use std::fmt;

use smallvec::SmallVec;

use crate::unicode::is_letter;

pub const MAX_NGRAM_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NgramError {
    #[error("ngram {value:?} has {len} characters, at most {MAX_NGRAM_LENGTH} allowed")]
    TooLong { value: String, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NgramOrder {
    Unigram = 1,
    Bigram = 2,
    Trigram = 3,
    Quadrigram = 4,
    Fivegram = 5,
}

impl NgramOrder {
    pub const ALL: [NgramOrder; 5] = [
        NgramOrder::Unigram,
        NgramOrder::Bigram,
        NgramOrder::Trigram,
        NgramOrder::Quadrigram,
        NgramOrder::Fivegram,
    ];

    #[inline(always)]
    pub const fn length(self) -> usize {
        self as usize
    }

    pub const fn from_len(len: usize) -> Option<NgramOrder> {
        match len {
            1 => Some(NgramOrder::Unigram),
            2 => Some(NgramOrder::Bigram),
            3 => Some(NgramOrder::Trigram),
            4 => Some(NgramOrder::Quadrigram),
            5 => Some(NgramOrder::Fivegram),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NgramOrder::Unigram => "unigram",
            NgramOrder::Bigram => "bigram",
            NgramOrder::Trigram => "trigram",
            NgramOrder::Quadrigram => "quadrigram",
            NgramOrder::Fivegram => "fivegram",
        }
    }

    /// Archive name of this order inside a language's model directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            NgramOrder::Unigram => "unigrams.json.zip",
            NgramOrder::Bigram => "bigrams.json.zip",
            NgramOrder::Trigram => "trigrams.json.zip",
            NgramOrder::Quadrigram => "quadrigrams.json.zip",
            NgramOrder::Fivegram => "fivegrams.json.zip",
        }
    }
}

impl fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable run of at most five characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ngram {
    value: String,
}

impl Ngram {
    /// Panics if `value` has more than five characters; use
    /// [`Ngram::try_new`] for untrusted input.
    pub fn new(value: impl Into<String>) -> Self {
        match Self::try_new(value) {
            Ok(ngram) => ngram,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, NgramError> {
        let value = value.into();
        let len = value.chars().count();
        if len > MAX_NGRAM_LENGTH {
            return Err(NgramError::TooLong { value, len });
        }
        Ok(Self { value })
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    #[inline]
    pub fn order(&self) -> Option<NgramOrder> {
        NgramOrder::from_len(self.char_count())
    }

    /// This ngram followed by its prefixes, longest first, down to one character.
    /// Empty for the zerogram.
    pub fn lower_order_chain(&self) -> SmallVec<[&str; MAX_NGRAM_LENGTH]> {
        lower_order_chain(&self.value)
    }
}

/// Prefix chain of `value`: `value` itself, then every prefix one character
/// shorter, ending at length one.
pub fn lower_order_chain(value: &str) -> SmallVec<[&str; MAX_NGRAM_LENGTH]> {
    let mut chain: SmallVec<[&str; MAX_NGRAM_LENGTH]> = SmallVec::new();
    if value.is_empty() {
        return chain;
    }
    chain.push(value);
    let mut ends: SmallVec<[usize; MAX_NGRAM_LENGTH]> =
        value.char_indices().skip(1).map(|(i, _)| i).collect();
    while let Some(end) = ends.pop() {
        chain.push(&value[..end]);
    }
    chain
}

impl Borrow<str> for Ngram {
    #[inline(always)]
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for Ngram {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<&str> for Ngram {
    type Error = NgramError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ngram::try_new(value)
    }
}

/// Distinct ngrams of `order` in cleaned text, sorted. Only windows made
/// entirely of letters count, so no ngram spans a word boundary.
pub fn distinct_ngrams(text: &str, order: NgramOrder) -> Vec<&str> {
    let n = order.length();
    let bounds: Vec<(usize, char)> = text.char_indices().collect();
    if bounds.len() < n {
        return Vec::new();
    }
    let mut ngrams = Vec::with_capacity(bounds.len() + 1 - n);
    for start in 0..=bounds.len() - n {
        let window = &bounds[start..start + n];
        if !window.iter().all(|&(_, c)| is_letter(c)) {
            continue;
        }
        let from = window[0].0;
        let to = bounds.get(start + n).map_or(text.len(), |&(i, _)| i);
        ngrams.push(&text[from..to]);
    }
    ngrams.sort_unstable();
    ngrams.dedup();
    ngrams
}
