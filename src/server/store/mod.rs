//! whole-document persistence, every request loads and saves the full document

pub(crate) mod file;

use derive_more::{Display, Error, From};
use log::info;
use tokio::sync::Mutex;
use crate::server::model::document::Document;

#[derive(Debug, Display, Error, From)]
pub(crate) enum StoreError {
    #[display("store io failed, {_0}")]
    Io(#[error(source)] std::io::Error),
    #[display("store is corrupt, {_0}")]
    Corrupt(#[error(source)] serde_json::Error),
    #[display("store is invalid, {_0}")]
    #[from(ignore)]
    Invalid(#[error(not(source))] String),
    #[display("store has not been initialized")]
    #[from(ignore)]
    Uninitialized,
}

/// Raw storage medium behind the store.
pub(crate) trait Backend: Send + Sync + 'static {
    /// returns `None` when nothing has been stored yet
    fn read(&self) -> Result<Option<String>, StoreError>;
    /// replaces the previous content entirely
    fn write(&self, contents: &str) -> Result<(), StoreError>;
}

/// Reads and validates the whole document.
pub(crate) fn load(backend: &dyn Backend) -> Result<Document, StoreError> {
    let raw = backend.read()?.ok_or(StoreError::Uninitialized)?;
    let doc: Document = serde_json::from_str(&raw)?;
    doc.check().map_err(StoreError::Invalid)?;
    Ok(doc)
}

/// Serializes the whole document and writes it back. Not atomic.
pub(crate) fn save(backend: &dyn Backend, doc: &Document) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(doc)?;
    backend.write(&raw)
}

/// Serializes every load-mutate-save cycle so concurrent writers cannot lose updates.
pub(crate) struct Store {
    backend: Mutex<Box<dyn Backend>>,
}

impl Store {
    pub fn new(backend: impl Backend) -> Self {
        let backend: Box<dyn Backend> = Box::new(backend);
        Self {
            backend: Mutex::new(backend),
        }
    }

    /// Writes an empty document if nothing is stored yet, otherwise validates
    /// what is there so a broken store fails at startup.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let backend = self.backend.lock().await;
        if backend.read()?.is_none() {
            info!("no store found, creating an empty one");
            return save(&**backend, &Document::default());
        }
        let doc = load(&**backend)?;
        info!("store loaded, {} tables, {} assignments, {} ads", doc.tables.len(), doc.assignments.len(), doc.ads.len());
        Ok(())
    }

    /// Loads a fresh document and hands it to `f`.
    pub async fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> Result<T, StoreError> {
        let backend = self.backend.lock().await;
        let doc = load(&**backend)?;
        Ok(f(&doc))
    }

    /// Loads, lets `f` mutate, then saves. Nothing is written when `f` fails.
    pub async fn update<T, E>(&self, f: impl FnOnce(&mut Document) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let backend = self.backend.lock().await;
        let mut doc = load(&**backend)?;
        let out = f(&mut doc)?;
        save(&**backend, &doc)?;
        Ok(out)
    }
}

/// for test
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryBackend {
    contents: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryBackend {
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: std::sync::Mutex::new(Some(contents.to_string())),
        }
    }
}

#[cfg(test)]
impl Backend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.lock().unwrap().clone())
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        *self.contents.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}

/// for test, accepts reads but refuses every write
#[cfg(test)]
pub(crate) struct ReadOnlyBackend(pub MemoryBackend);

#[cfg(test)]
impl Backend for ReadOnlyBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        self.0.read()
    }

    fn write(&self, _: &str) -> Result<(), StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store").into())
    }
}
