use crate::error::StorageResult;
use crate::models::ContactDirectory;
use crate::repositories::traits::DirectoryRepository;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory repository backed by a single JSON file.
///
/// A missing file is an empty address book. Saves go to a sibling temp file
/// that is then renamed over the target, so an interrupted save leaves the
/// previous contents readable.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("addressbook"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DirectoryRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<ContactDirectory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "No saved address book, starting empty"
                );
                None
            }
            Err(e) => return Err(e.into()),
        };

        let directory = ContactDirectory::from_bytes(bytes.as_deref())?;
        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "Address book loaded"
        );
        Ok(directory)
    }

    fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        let bytes = directory.to_bytes()?;
        let temp = self.temp_path();

        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path)?;

        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "Address book saved"
        );
        Ok(())
    }
}
