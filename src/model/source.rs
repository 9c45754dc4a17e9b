use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::lang::Language;
use crate::model::{ModelError, NgramTable};
use crate::ngram::NgramOrder;

/// Environment variable selecting the model root of [`DirectoryModelSource::from_env`].
pub const MODEL_DIR_ENV: &str = "GLOSSA_MODEL_DIR";
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Where frequency tables come from. Called at most once per
/// (language, order) by [`ModelCache`](crate::model::ModelCache).
pub trait ModelSource: Send + Sync {
    fn load(&self, language: Language, order: NgramOrder) -> Result<NgramTable, ModelError>;
}

impl<F> ModelSource for F
where
    F: Fn(Language, NgramOrder) -> Result<NgramTable, ModelError> + Send + Sync,
{
    fn load(&self, language: Language, order: NgramOrder) -> Result<NgramTable, ModelError> {
        self(language, order)
    }
}

/// Reads `<root>/<iso 639-1>/<order>s.json.zip`.
#[derive(Debug, Clone)]
pub struct DirectoryModelSource {
    root: PathBuf,
}

impl DirectoryModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root from `GLOSSA_MODEL_DIR`, falling back to `./models`.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(MODEL_DIR_ENV).unwrap_or_else(|| DEFAULT_MODEL_DIR.into()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, language: Language, order: NgramOrder) -> Option<PathBuf> {
        let code = language.iso_code_639_1()?;
        Some(self.root.join(code.as_str()).join(order.file_name()))
    }
}

impl ModelSource for DirectoryModelSource {
    fn load(&self, language: Language, order: NgramOrder) -> Result<NgramTable, ModelError> {
        let path = self
            .path_of(language, order)
            .ok_or(ModelError::NotFound { language, order })?;
        let file = File::open(&path)?;
        NgramTable::from_archive(language, order, BufReader::new(file))
    }
}

#[derive(Debug, Clone)]
enum Resource {
    Table(NgramTable),
    Json(String),
    Archive(Vec<u8>),
}

/// Resources registered in memory: bundled archives or test fixtures.
#[derive(Debug, Default)]
pub struct InMemoryModelSource {
    resources: RwLock<HashMap<(Language, NgramOrder), Resource>>,
}

impl InMemoryModelSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, language: Language, order: NgramOrder, table: NgramTable) -> Self {
        self.insert(language, order, Resource::Table(table));
        self
    }

    pub fn with_json(self, language: Language, order: NgramOrder, json: impl Into<String>) -> Self {
        self.insert(language, order, Resource::Json(json.into()));
        self
    }

    /// Registers zipped JSON, as found in a model directory.
    pub fn with_archive(self, language: Language, order: NgramOrder, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(language, order, Resource::Archive(bytes.into()));
        self
    }

    fn insert(&self, language: Language, order: NgramOrder, resource: Resource) {
        let mut resources = self.resources.write().unwrap_or_else(|e| e.into_inner());
        resources.insert((language, order), resource);
    }

    pub fn len(&self) -> usize {
        self.resources.read().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModelSource for InMemoryModelSource {
    fn load(&self, language: Language, order: NgramOrder) -> Result<NgramTable, ModelError> {
        let resources = self.resources.read().unwrap_or_else(|e| e.into_inner());
        match resources.get(&(language, order)) {
            Some(Resource::Table(table)) => Ok(table.clone()),
            Some(Resource::Json(json)) => NgramTable::from_json(language, order, json),
            Some(Resource::Archive(bytes)) => {
                NgramTable::from_archive(language, order, Cursor::new(bytes.as_slice()))
            }
            None => Err(ModelError::NotFound { language, order }),
        }
    }
}
