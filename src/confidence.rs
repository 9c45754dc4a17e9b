use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// A language with its confidence relative to the best candidate of the
/// same text. The best candidate is always `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceValue {
    language: Language,
    value: f64,
}

impl ConfidenceValue {
    #[inline]
    pub fn new(language: Language, value: f64) -> Self {
        Self { language, value }
    }

    #[inline(always)]
    pub fn language(&self) -> Language {
        self.language
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for ConfidenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.language, self.value)
    }
}
