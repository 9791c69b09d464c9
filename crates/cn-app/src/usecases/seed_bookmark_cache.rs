use std::sync::Arc;

use tracing::{info, warn};

use cn_core::ports::{ClipStorePort, FolderStorePort, RepositoryError};

use crate::cache::BookmarkCache;

/// Bulk cache seeding, run at session start or on pull-to-refresh.
///
/// Fetches the full folder and clip sets from the store and applies the
/// cache's bulk replace-and-mark operations — the only legitimate path to an
/// initialized cache. The two kinds seed independently so a folder-only
/// refresh does not touch the clip mirror.
pub struct SeedBookmarkCache {
    folder_store: Arc<dyn FolderStorePort>,
    clip_store: Arc<dyn ClipStorePort>,
    cache: Arc<BookmarkCache>,
}

impl SeedBookmarkCache {
    pub fn from_ports(
        folder_store: Arc<dyn FolderStorePort>,
        clip_store: Arc<dyn ClipStorePort>,
        cache: Arc<BookmarkCache>,
    ) -> Self {
        Self {
            folder_store,
            clip_store,
            cache,
        }
    }

    /// Seed both kinds. A folder failure aborts before clips are touched.
    #[tracing::instrument(name = "usecase.seed_bookmark_cache.execute", skip(self))]
    pub async fn execute(&self) -> Result<(), RepositoryError> {
        self.seed_folders().await?;
        self.seed_clips().await
    }

    #[tracing::instrument(name = "usecase.seed_bookmark_cache.folders", skip(self))]
    pub async fn seed_folders(&self) -> Result<(), RepositoryError> {
        let folders = self.folder_store.fetch_all_folders().await.map_err(|e| {
            warn!(error = %e, "folder seed fetch failed");
            RepositoryError::FetchFailed
        })?;
        info!(count = folders.len(), "seeding folder cache");
        self.cache.reset_and_set_folders(folders).await;
        Ok(())
    }

    // clip fetches collapse to Unknown, matching the clip repository paths
    #[tracing::instrument(name = "usecase.seed_bookmark_cache.clips", skip(self))]
    pub async fn seed_clips(&self) -> Result<(), RepositoryError> {
        let clips = self.clip_store.fetch_all_clips().await.map_err(|e| {
            warn!(error = %e, "clip seed fetch failed");
            RepositoryError::Unknown
        })?;
        info!(count = clips.len(), "seeding clip cache");
        self.cache.reset_and_set_clips(clips).await;
        Ok(())
    }
}
