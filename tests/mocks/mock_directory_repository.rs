use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::{ContactDirectory, DirectoryRepository};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the "saved" address book as serialized bytes in memory, so loads go
/// through the same validation as the file repository, and tracks method
/// calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    saved: Arc<Mutex<Option<Vec<u8>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a new repository with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `directory`.
    pub fn with_directory(directory: &ContactDirectory) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(directory.to_bytes().unwrap());
        repo
    }

    /// Create a repository whose saved bytes are `raw`.
    pub fn with_raw(raw: &[u8]) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(raw.to_vec());
        repo
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Decode what was last saved, if anything.
    pub fn saved_directory(&self) -> Option<ContactDirectory> {
        let saved = self.saved.lock().unwrap();
        saved
            .as_deref()
            .map(|bytes| ContactDirectory::from_bytes(Some(bytes)).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self) -> StorageResult<ContactDirectory> {
        self.track_call("load");

        let saved = self.saved.lock().unwrap();
        ContactDirectory::from_bytes(saved.as_deref())
    }

    fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }

        let bytes = directory.to_bytes()?;
        *self.saved.lock().unwrap() = Some(bytes);
        Ok(())
    }
}
