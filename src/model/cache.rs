use std::fmt;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::lang::Language;
use crate::model::source::{DirectoryModelSource, ModelSource};
use crate::model::NgramTable;
use crate::ngram::NgramOrder;

type Slot = Arc<OnceLock<Arc<NgramTable>>>;

static GLOBAL_MODELS: OnceLock<Arc<ModelCache>> = OnceLock::new();

/// Process-wide cache over [`DirectoryModelSource::from_env`], shared by
/// every detector built without an explicit cache.
pub fn global_models() -> Arc<ModelCache> {
    Arc::clone(GLOBAL_MODELS.get_or_init(|| Arc::new(ModelCache::new(DirectoryModelSource::from_env()))))
}

/// Concurrent (language, order) → table store with one load per key.
///
/// Tables are never evicted; the key space is bounded by the catalogue.
/// A failed load is logged and cached as an empty table, so the language
/// simply contributes no statistical evidence.
pub struct ModelCache {
    source: Box<dyn ModelSource>,
    tables: DashMap<(Language, NgramOrder), Slot>,
}

impl ModelCache {
    pub fn new(source: impl ModelSource + 'static) -> Self {
        Self { source: Box::new(source), tables: DashMap::new() }
    }

    /// Table for `(language, order)`, loading it on first access.
    ///
    /// Concurrent first accesses for the same key run the loader once; the
    /// others block on the slot until the table is complete.
    pub fn table(&self, language: Language, order: NgramOrder) -> Arc<NgramTable> {
        let slot = self.slot(language, order);
        Arc::clone(slot.get_or_init(|| Arc::new(self.load(language, order))))
    }

    fn slot(&self, language: Language, order: NgramOrder) -> Slot {
        if let Some(slot) = self.tables.get(&(language, order)) {
            return Arc::clone(&slot);
        }
        // The shard guard is dropped here, before any loader runs.
        Arc::clone(&self.tables.entry((language, order)).or_default())
    }

    fn load(&self, language: Language, order: NgramOrder) -> NgramTable {
        match self.source.load(language, order) {
            Ok(table) => {
                debug!(%language, %order, entries = table.len(), "loaded language model");
                table
            }
            Err(e) => {
                warn!(%language, %order, error = %e, "language model unavailable, using empty table");
                NgramTable::new()
            }
        }
    }

    /// Loads every order of every language up front.
    pub fn preload(&self, languages: &[Language]) {
        info!(languages = languages.len(), "preloading language models");
        std::thread::scope(|scope| {
            for &language in languages {
                scope.spawn(move || {
                    for order in NgramOrder::ALL {
                        self.table(language, order);
                    }
                });
            }
        });
    }

    pub fn is_loaded(&self, language: Language, order: NgramOrder) -> bool {
        self.tables
            .get(&(language, order))
            .is_some_and(|slot| slot.value().get().is_some())
    }

    /// Number of fully loaded tables.
    pub fn loaded_count(&self) -> usize {
        self.tables.iter().filter(|entry| entry.value().get().is_some()).count()
    }
}

impl fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCache")
            .field("loaded", &self.loaded_count())
            .finish_non_exhaustive()
    }
}
