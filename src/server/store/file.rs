use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use crate::server::store::{Backend, StoreError};

/// Document kept in a single json file.
pub(crate) struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::server::store::{load, Store};
    use super::*;

    #[tokio::test]
    async fn initialize_writes_empty_document_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("db.json");
        let store = Store::new(FileBackend::new(&path));
        store.initialize().await.unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\n  \"tables\": [],\n  \"assignments\": {},\n  \"ads\": []\n}");
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("db.json"));
        assert!(backend.read().unwrap().is_none());
        assert!(matches!(load(&backend), Err(StoreError::Uninitialized)));
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be read as a file
        let backend = FileBackend::new(dir.path());
        assert!(matches!(backend.read(), Err(StoreError::Io(_))));
    }
}
