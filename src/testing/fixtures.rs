//! Shared test fixtures: small hand-made models and instrumented sources.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::lang::Language;
use crate::model::{InMemoryModelSource, ModelCache, ModelError, ModelSource, NgramTable};
use crate::ngram::NgramOrder;

/// Zips `json` as the single entry of an archive, like a model file on disk.
pub fn zip_json(json: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("model.json", FileOptions::default()).unwrap();
    writer.write_all(json.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Wraps a source, counting loads and optionally slowing each one down.
pub struct CountingSource<S> {
    inner: S,
    calls: Arc<AtomicUsize>,
    delay: Duration,
}

impl<S: ModelSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, calls: Arc::new(AtomicUsize::new(0)), delay: Duration::ZERO }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl<S: ModelSource> ModelSource for CountingSource<S> {
    fn load(&self, language: Language, order: NgramOrder) -> Result<NgramTable, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.inner.load(language, order)
    }
}

type Tables = [&'static [(&'static str, f64)]; 5];

const ENGLISH_ALTER: Tables = [
    &[("a", 0.01), ("l", 0.02), ("t", 0.03), ("e", 0.04), ("r", 0.05)],
    &[("al", 0.11), ("lt", 0.12), ("te", 0.13), ("er", 0.14)],
    &[("alt", 0.19), ("lte", 0.2), ("ter", 0.21)],
    &[("alte", 0.25), ("lter", 0.26)],
    &[("alter", 0.29)],
];

const GERMAN_ALTER: Tables = [
    &[("a", 0.06), ("l", 0.07), ("t", 0.08), ("e", 0.09), ("r", 0.1)],
    &[("al", 0.15), ("lt", 0.16), ("te", 0.17), ("er", 0.18)],
    &[("alt", 0.22), ("lte", 0.23), ("ter", 0.24)],
    &[("alte", 0.27), ("lter", 0.28)],
    &[("alter", 0.3)],
];

/// English and German models covering only the word "alter", German
/// uniformly more likely at every order.
pub fn alter_models() -> InMemoryModelSource {
    let mut source = InMemoryModelSource::new();
    for (language, tables) in [(Language::English, ENGLISH_ALTER), (Language::German, GERMAN_ALTER)] {
        for (order, pairs) in NgramOrder::ALL.into_iter().zip(tables) {
            source = source.with_table(language, order, pairs.iter().copied().collect());
        }
    }
    source
}

/// JSON model document for `pairs`, grouping ngrams by frequency.
pub fn model_json(language: Language, pairs: &[(&str, f64)]) -> String {
    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for &(ngram, frequency) in pairs {
        let fraction = format!("{}/1000", (frequency * 1000.0).round() as u64);
        groups.entry(fraction).or_default().push(ngram);
    }
    let ngrams: BTreeMap<String, String> =
        groups.into_iter().map(|(fraction, ngrams)| (fraction, ngrams.join(" "))).collect();
    serde_json::json!({ "language": language, "ngrams": ngrams }).to_string()
}

/// Writes the "alter" models as a zipped model directory under `root`.
pub fn write_alter_model_dir(root: &Path) {
    for (language, tables) in [(Language::English, ENGLISH_ALTER), (Language::German, GERMAN_ALTER)] {
        let dir = root.join(language.iso_code_639_1().unwrap().as_str());
        std::fs::create_dir_all(&dir).unwrap();
        for (order, pairs) in NgramOrder::ALL.into_iter().zip(tables) {
            std::fs::write(dir.join(order.file_name()), zip_json(&model_json(language, pairs))).unwrap();
        }
    }
}

pub fn alter_cache() -> Arc<ModelCache> {
    Arc::new(ModelCache::new(alter_models()))
}

/// Sum of `ln` over the given frequencies.
pub fn ln_sum(frequencies: &[f64]) -> f64 {
    frequencies.iter().map(|f| f.ln()).sum()
}
