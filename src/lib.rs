//! Statistical n-gram language identification for 75 natural languages.
//!
//! A [`LanguageDetector`] cleans the input, lets cheap script and
//! character rules settle obvious cases, and otherwise scores the remaining
//! candidates with per-language n-gram models loaded lazily into a shared
//! [`ModelCache`].

pub mod alphabet;
pub mod builder;
pub mod config;
pub mod confidence;
pub mod detector;
pub mod lang;
pub mod model;
pub mod ngram;
mod rules;
pub mod unicode;

pub use alphabet::Alphabet;
pub use builder::{BuilderError, LanguageDetectorBuilder};
pub use confidence::ConfidenceValue;
pub use config::{ConfigError, DetectorConfig};
pub use detector::LanguageDetector;
pub use lang::{IsoCode639_1, IsoCode639_3, Language, ParseIsoCodeError, ParseLanguageError};
pub use model::{
    DirectoryModelSource, InMemoryModelSource, ModelCache, ModelError, ModelSource, NgramTable,
    global_models,
};
pub use ngram::{Ngram, NgramError, NgramOrder};
