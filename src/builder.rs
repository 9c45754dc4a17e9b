use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::DetectorConfig;
use crate::detector::LanguageDetector;
use crate::lang::{IsoCode639_1, IsoCode639_3, Language};
use crate::model::{DirectoryModelSource, ModelCache, global_models};

pub const MAXIMUM_RELATIVE_DISTANCE: f64 = 0.99;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    #[error("a detector needs at least two distinct languages, got {0}")]
    TooFewLanguages(usize),
    #[error("minimum relative distance must lie in [0.0, {MAXIMUM_RELATIVE_DISTANCE}], got {0}")]
    MinimumRelativeDistanceOutOfRange(f64),
}

/// Collects the language set and tunables of a [`LanguageDetector`].
///
/// ```no_run
/// use glossa::{Language, LanguageDetectorBuilder};
///
/// let detector = LanguageDetectorBuilder::from_all_languages_without(&[Language::Latin])
///     .with_minimum_relative_distance(0.25)
///     .with_preloaded_language_models()
///     .build()?;
/// # Ok::<(), glossa::BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LanguageDetectorBuilder {
    languages: BTreeSet<Language>,
    minimum_relative_distance: f64,
    preload: bool,
    models: Option<Arc<ModelCache>>,
}

macro_rules! from_languages_with_script {
    ($($script:ident),* $(,)?) => {
        paste::paste! {
            $(
                pub fn [<from_all_languages_with_ $script _script>]() -> Self {
                    Self::with_languages(Language::[<all_with_ $script _script>]())
                }
            )*
        }
    };
}

impl LanguageDetectorBuilder {
    fn with_languages(languages: impl IntoIterator<Item = Language>) -> Self {
        Self {
            languages: languages.into_iter().filter(|l| !l.is_unknown()).collect(),
            minimum_relative_distance: 0.0,
            preload: false,
            models: None,
        }
    }

    pub fn from_all_languages() -> Self {
        Self::with_languages(Language::all().iter().copied())
    }

    pub fn from_all_spoken_languages() -> Self {
        Self::with_languages(Language::all_spoken_languages())
    }

    from_languages_with_script!(arabic, cyrillic, devanagari, latin);

    pub fn from_all_languages_without(excluded: &[Language]) -> Self {
        Self::with_languages(Language::all().iter().copied().filter(|l| !excluded.contains(l)))
    }

    pub fn from_languages(languages: &[Language]) -> Self {
        Self::with_languages(languages.iter().copied())
    }

    pub fn from_iso_codes_639_1(codes: &[IsoCode639_1]) -> Self {
        Self::with_languages(codes.iter().map(|&code| Language::from_iso_code_639_1(code)))
    }

    pub fn from_iso_codes_639_3(codes: &[IsoCode639_3]) -> Self {
        Self::with_languages(codes.iter().map(|&code| Language::from_iso_code_639_3(code)))
    }

    /// Languages, distance and preloading from `config`; a configured model
    /// directory gets a cache of its own instead of the global one.
    pub fn from_config(config: &DetectorConfig) -> Self {
        let builder = if config.languages.is_empty() {
            Self::from_all_languages()
        } else {
            Self::from_languages(&config.languages)
        };
        let mut builder = builder.with_minimum_relative_distance(config.minimum_relative_distance);
        if config.preload_models {
            builder = builder.with_preloaded_language_models();
        }
        if let Some(dir) = &config.model_dir {
            builder = builder.with_model_cache(Arc::new(ModelCache::new(DirectoryModelSource::new(dir))));
        }
        builder
    }

    /// Required gap between the two best confidences, in `[0.0, 0.99]`.
    /// Checked by [`build`](Self::build).
    pub fn with_minimum_relative_distance(mut self, distance: f64) -> Self {
        self.minimum_relative_distance = distance;
        self
    }

    /// Loads every model of every selected language during `build`.
    pub fn with_preloaded_language_models(mut self) -> Self {
        self.preload = true;
        self
    }

    /// Uses `models` instead of [`global_models`].
    pub fn with_model_cache(mut self, models: Arc<ModelCache>) -> Self {
        self.models = Some(models);
        self
    }

    pub fn build(self) -> Result<LanguageDetector, BuilderError> {
        if self.languages.len() < 2 {
            return Err(BuilderError::TooFewLanguages(self.languages.len()));
        }
        let distance = self.minimum_relative_distance;
        if !(0.0..=MAXIMUM_RELATIVE_DISTANCE).contains(&distance) {
            return Err(BuilderError::MinimumRelativeDistanceOutOfRange(distance));
        }

        let languages: Vec<Language> = self.languages.into_iter().collect();
        let models = self.models.unwrap_or_else(global_models);
        if self.preload {
            info!(languages = languages.len(), "building detector with preloaded models");
            models.preload(&languages);
        }
        Ok(LanguageDetector::new(languages, distance, models))
    }
}
