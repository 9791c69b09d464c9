use std::sync::Arc;

use tracing::{debug, warn};

use cn_core::ids::ClipId;
use cn_core::ports::{ClipStorePort, RepositoryError};
use cn_core::Clip;

use crate::cache::BookmarkCache;

/// Read-through/write-through facade over the clip store.
///
/// Same shape as [`FolderRepository`](crate::repositories::FolderRepository),
/// with one inherited wrinkle: the read paths collapse every store failure
/// into [`RepositoryError::Unknown`], so callers cannot tell a backend
/// outage from anything else. The folder side keeps finer granularity; the
/// asymmetry is kept as observed (see DESIGN.md) rather than fixed here.
pub struct ClipRepository {
    store: Arc<dyn ClipStorePort>,
    cache: Arc<BookmarkCache>,
}

impl ClipRepository {
    pub fn from_ports(store: Arc<dyn ClipStorePort>, cache: Arc<BookmarkCache>) -> Self {
        Self { store, cache }
    }

    /// Fetch one clip by id. An initialized cache is authoritative; a miss
    /// there is a genuine absence.
    #[tracing::instrument(name = "repo.clip.fetch", skip(self), fields(clip_id = %id))]
    pub async fn fetch_clip(&self, id: &ClipId) -> Result<Clip, RepositoryError> {
        if self.cache.is_clips_initialized().await {
            debug!("serving clip from cache");
            return self.cache.clip(id).await.ok_or(RepositoryError::NotFound);
        }

        self.store.fetch_clip(id).await.map_err(|e| {
            warn!(error = %e, "clip fetch failed at store");
            RepositoryError::Unknown
        })
    }

    /// Every clip, soft-deleted included. Does not seed the cache on the
    /// cold path.
    #[tracing::instrument(name = "repo.clip.fetch_all", skip(self))]
    pub async fn fetch_all_clips(&self) -> Result<Vec<Clip>, RepositoryError> {
        if self.cache.is_clips_initialized().await {
            debug!("serving clips from cache");
            return Ok(self.cache.clips().await);
        }

        self.store.fetch_all_clips().await.map_err(|e| {
            warn!(error = %e, "clip fetch-all failed at store");
            RepositoryError::Unknown
        })
    }

    /// Clips never opened by the user.
    #[tracing::instrument(name = "repo.clip.fetch_unvisited", skip(self))]
    pub async fn fetch_unvisited_clips(&self) -> Result<Vec<Clip>, RepositoryError> {
        if self.cache.is_clips_initialized().await {
            debug!("serving unvisited clips from cache");
            let clips = self.cache.clips().await;
            return Ok(clips.into_iter().filter(|c| c.is_unvisited()).collect());
        }

        self.store.fetch_unvisited_clips().await.map_err(|e| {
            warn!(error = %e, "unvisited clip fetch failed at store");
            RepositoryError::Unknown
        })
    }

    #[tracing::instrument(name = "repo.clip.insert", skip(self, clip), fields(clip_id = %clip.id))]
    pub async fn insert_clip(&self, clip: Clip) -> Result<(), RepositoryError> {
        self.store.insert_clip(&clip).await.map_err(|e| {
            warn!(error = %e, "clip insert failed at store");
            RepositoryError::InsertFailed
        })?;
        self.mirror(clip).await;
        Ok(())
    }

    #[tracing::instrument(name = "repo.clip.update", skip(self, clip), fields(clip_id = %clip.id))]
    pub async fn update_clip(&self, clip: Clip) -> Result<(), RepositoryError> {
        self.store.update_clip(&clip).await.map_err(|e| {
            warn!(error = %e, "clip update failed at store");
            RepositoryError::UpdateFailed
        })?;
        self.mirror(clip).await;
        Ok(())
    }

    /// Logical delete of a caller-tombstoned clip.
    #[tracing::instrument(name = "repo.clip.delete", skip(self, clip), fields(clip_id = %clip.id))]
    pub async fn delete_clip(&self, clip: Clip) -> Result<(), RepositoryError> {
        self.store.delete_clip(&clip).await.map_err(|e| {
            warn!(error = %e, "clip delete failed at store");
            RepositoryError::DeleteFailed
        })?;
        // kept in the cache as a tombstone, filtered out by predicates
        self.mirror(clip).await;
        Ok(())
    }

    async fn mirror(&self, clip: Clip) {
        if self.cache.is_clips_initialized().await {
            self.cache.set_clip(clip).await;
        }
    }
}
