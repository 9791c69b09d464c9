use crate::folder::Folder;
use crate::ids::FolderId;

use super::errors::StoreError;

/// Durable storage for folder records.
///
/// Fetches return folders with their direct children populated recursively.
/// `delete_folder` is logical: the caller hands over a value whose
/// `deleted_at` is already set and the store persists it as-is.
#[async_trait::async_trait]
pub trait FolderStorePort: Send + Sync {
    async fn fetch_folder(&self, id: &FolderId) -> Result<Folder, StoreError>;

    /// Full folder set, soft-deleted records included.
    async fn fetch_all_folders(&self) -> Result<Vec<Folder>, StoreError>;

    async fn insert_folder(&self, folder: &Folder) -> Result<(), StoreError>;
    async fn update_folder(&self, folder: &Folder) -> Result<(), StoreError>;
    async fn delete_folder(&self, folder: &Folder) -> Result<(), StoreError>;
}
