use crate::clip::Clip;
use crate::ids::ClipId;

use super::errors::StoreError;

/// Durable storage for clip records. Same contract shape as the folder
/// store; `delete_clip` persists a caller-supplied tombstoned value.
#[async_trait::async_trait]
pub trait ClipStorePort: Send + Sync {
    async fn fetch_clip(&self, id: &ClipId) -> Result<Clip, StoreError>;

    /// Full clip set, soft-deleted records included.
    async fn fetch_all_clips(&self) -> Result<Vec<Clip>, StoreError>;

    /// Clips whose `last_visited_at` is unset.
    async fn fetch_unvisited_clips(&self) -> Result<Vec<Clip>, StoreError>;

    async fn insert_clip(&self, clip: &Clip) -> Result<(), StoreError>;
    async fn update_clip(&self, clip: &Clip) -> Result<(), StoreError>;
    async fn delete_clip(&self, clip: &Clip) -> Result<(), StoreError>;
}
