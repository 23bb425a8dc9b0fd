use crate::error::StorageResult;
use crate::models::ContactDirectory;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over where the directory lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait DirectoryRepository {
    /// Load the saved directory. Nothing saved yet yields an empty directory.
    fn load(&self) -> StorageResult<ContactDirectory>;

    /// Persist the directory, replacing whatever was saved before.
    fn save(&self, directory: &ContactDirectory) -> StorageResult<()>;
}
