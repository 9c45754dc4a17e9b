//! Detector configuration persisted as JSON.
//!
//! ```json
//! {
//!   "languages": ["ENGLISH", "GERMAN"],
//!   "minimum_relative_distance": 0.1,
//!   "preload_models": false,
//!   "model_dir": "/usr/share/glossa/models"
//! }
//! ```
//!
//! Every field is optional; an empty language list selects every language.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lang::Language;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    pub languages: Vec<Language>,
    pub minimum_relative_distance: f64,
    pub preload_models: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_dir: Option<PathBuf>,
}

impl DetectorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_fields() {
        let config = DetectorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DetectorConfig::default());
        assert!(config.languages.is_empty());
        assert_eq!(config.minimum_relative_distance, 0.0);
    }

    #[test]
    fn languages_use_upper_case_names() {
        let config = DetectorConfig::from_json_str(
            r#"{"languages": ["ENGLISH", "GERMAN"], "minimum_relative_distance": 0.25, "preload_models": true}"#,
        )
        .unwrap();
        assert_eq!(config.languages, vec![Language::English, Language::German]);
        assert_eq!(config.minimum_relative_distance, 0.25);
        assert!(config.preload_models);

        let back = DetectorConfig::from_json_str(&config.to_json_string().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn bad_documents_are_rejected() {
        let err = DetectorConfig::from_json_str(r#"{"languages": ["KLINGON"]}"#).unwrap_err();
        assert!(err.to_string().contains("KLINGON"), "{err}");
        assert!(DetectorConfig::from_json_str(r#"{"lang": []}"#).is_err());
        assert!(matches!(
            DetectorConfig::from_path("/nonexistent/glossa.json"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glossa.json");
        std::fs::write(&path, r#"{"model_dir": "models"}"#).unwrap();
        let config = DetectorConfig::from_path(&path).unwrap();
        assert_eq!(config.model_dir, Some(PathBuf::from("models")));
    }
}
