use std::sync::Arc;

use tracing::{debug, warn};

use cn_core::ids::FolderId;
use cn_core::ports::{FolderStorePort, RepositoryError};
use cn_core::Folder;

use crate::cache::BookmarkCache;

/// Read-through/write-through facade over the folder store.
///
/// Reads serve from the cache whenever the folder mirror is initialized and
/// fall back to the store otherwise. Writes always go to the store first;
/// the cache is mirrored only after store success, so a failed write leaves
/// cache and store consistent by construction.
pub struct FolderRepository {
    store: Arc<dyn FolderStorePort>,
    cache: Arc<BookmarkCache>,
}

impl FolderRepository {
    pub fn from_ports(store: Arc<dyn FolderStorePort>, cache: Arc<BookmarkCache>) -> Self {
        Self { store, cache }
    }

    /// Fetch one folder by id.
    ///
    /// Once initialized the cache is authoritative: a miss is a genuine
    /// absence, never a reason to fall through to the store.
    #[tracing::instrument(name = "repo.folder.fetch", skip(self), fields(folder_id = %id))]
    pub async fn fetch_folder(&self, id: &FolderId) -> Result<Folder, RepositoryError> {
        if self.cache.is_folders_initialized().await {
            debug!("serving folder from cache");
            return self.cache.folder(id).await.ok_or(RepositoryError::NotFound);
        }

        self.store.fetch_folder(id).await.map_err(|e| {
            warn!(error = %e, "folder fetch failed at store");
            RepositoryError::FetchFailed
        })
    }

    /// Active folders with no parent.
    ///
    /// The store fallback fetches the full set and filters locally. It does
    /// not seed the cache: only the bulk seeding path may flip the
    /// initialized flag, so a cold read here leaves the cache untouched.
    #[tracing::instrument(name = "repo.folder.fetch_top_level", skip(self))]
    pub async fn fetch_top_level_folders(&self) -> Result<Vec<Folder>, RepositoryError> {
        let all = if self.cache.is_folders_initialized().await {
            debug!("serving top-level folders from cache");
            self.cache.folders().await
        } else {
            self.store.fetch_all_folders().await.map_err(|e| {
                warn!(error = %e, "top-level folder fetch failed at store");
                RepositoryError::FetchFailed
            })?
        };

        Ok(all.into_iter().filter(|f| f.is_top_level()).collect())
    }

    #[tracing::instrument(name = "repo.folder.insert", skip(self, folder), fields(folder_id = %folder.id))]
    pub async fn insert_folder(&self, folder: Folder) -> Result<(), RepositoryError> {
        self.store.insert_folder(&folder).await.map_err(|e| {
            warn!(error = %e, "folder insert failed at store");
            RepositoryError::InsertFailed
        })?;
        self.mirror(folder).await;
        Ok(())
    }

    #[tracing::instrument(name = "repo.folder.update", skip(self, folder), fields(folder_id = %folder.id))]
    pub async fn update_folder(&self, folder: Folder) -> Result<(), RepositoryError> {
        self.store.update_folder(&folder).await.map_err(|e| {
            warn!(error = %e, "folder update failed at store");
            RepositoryError::UpdateFailed
        })?;
        self.mirror(folder).await;
        Ok(())
    }

    /// Logical delete. The caller hands over a folder whose `deleted_at` is
    /// already set; this repository never mints timestamps.
    #[tracing::instrument(name = "repo.folder.delete", skip(self, folder), fields(folder_id = %folder.id))]
    pub async fn delete_folder(&self, folder: Folder) -> Result<(), RepositoryError> {
        self.store.delete_folder(&folder).await.map_err(|e| {
            warn!(error = %e, "folder delete failed at store");
            RepositoryError::DeleteFailed
        })?;
        // tombstones mirror as upserts, not removals; queries filter them out
        self.mirror(folder).await;
        Ok(())
    }

    /// Write-through mirror, skipped entirely while uninitialized so
    /// individual writes never build up a partial cache.
    async fn mirror(&self, folder: Folder) {
        if self.cache.is_folders_initialized().await {
            self.cache.set_folder(folder).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use cn_core::ports::StoreError;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    /// Store stub with per-operation call counters and a global failure
    /// switch.
    struct StubFolderStore {
        all: Vec<Folder>,
        fail: bool,
        fetch_calls: AtomicUsize,
        fetch_all_calls: AtomicUsize,
        write_calls: AtomicUsize,
    }

    impl StubFolderStore {
        fn with_folders(all: Vec<Folder>) -> Self {
            Self {
                all,
                fail: false,
                fetch_calls: AtomicUsize::new(0),
                fetch_all_calls: AtomicUsize::new(0),
                write_calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            let mut stub = Self::with_folders(Vec::new());
            stub.fail = true;
            stub
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.fail {
                Err(StoreError::msg("store unavailable"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl FolderStorePort for StubFolderStore {
        async fn fetch_folder(&self, id: &FolderId) -> Result<Folder, StoreError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.all
                .iter()
                .find(|f| &f.id == id)
                .cloned()
                .ok_or_else(|| StoreError::msg("no such folder"))
        }

        async fn fetch_all_folders(&self) -> Result<Vec<Folder>, StoreError> {
            self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            Ok(self.all.clone())
        }

        async fn insert_folder(&self, _folder: &Folder) -> Result<(), StoreError> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            self.check()
        }

        async fn update_folder(&self, _folder: &Folder) -> Result<(), StoreError> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            self.check()
        }

        async fn delete_folder(&self, _folder: &Folder) -> Result<(), StoreError> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            self.check()
        }
    }

    fn repo_with(
        store: StubFolderStore,
        cache: Arc<BookmarkCache>,
    ) -> (FolderRepository, Arc<StubFolderStore>) {
        let store = Arc::new(store);
        let repo = FolderRepository::from_ports(store.clone(), cache);
        (repo, store)
    }

    #[tokio::test]
    async fn initialized_cache_serves_fetch_without_store_call() {
        let folder = Folder::new("cached", at(1));
        let cache = Arc::new(BookmarkCache::new());
        cache.reset_and_set_folders(vec![folder.clone()]).await;
        let (repo, store) = repo_with(StubFolderStore::with_folders(Vec::new()), cache);

        let fetched = repo.fetch_folder(&folder.id).await.unwrap();

        assert_eq!(fetched, folder);
        assert_eq!(store.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn initialized_cache_miss_is_not_found_without_fallback() {
        let cache = Arc::new(BookmarkCache::new());
        cache.reset_and_set_folders(Vec::new()).await;
        let only_in_store = Folder::new("store-only", at(1));
        let (repo, store) =
            repo_with(StubFolderStore::with_folders(vec![only_in_store.clone()]), cache);

        let err = repo.fetch_folder(&only_in_store.id).await.unwrap_err();

        assert_eq!(err, RepositoryError::NotFound);
        assert_eq!(store.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn uninitialized_cache_falls_back_to_store() {
        let folder = Folder::new("stored", at(1));
        let cache = Arc::new(BookmarkCache::new());
        let (repo, store) = repo_with(StubFolderStore::with_folders(vec![folder.clone()]), cache);

        let fetched = repo.fetch_folder(&folder.id).await.unwrap();

        assert_eq!(fetched, folder);
        assert_eq!(store.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn store_fetch_failure_maps_to_fetch_failed() {
        let cache = Arc::new(BookmarkCache::new());
        let (repo, _store) = repo_with(StubFolderStore::failing(), cache);

        let err = repo.fetch_folder(&FolderId::new()).await.unwrap_err();

        assert_eq!(err, RepositoryError::FetchFailed);
    }

    #[tokio::test]
    async fn cold_top_level_fetch_filters_and_does_not_seed() {
        let active_a = Folder::new("a", at(1));
        let active_b = Folder::new("b", at(2));
        let mut trashed = Folder::new("trashed", at(3));
        trashed.mark_deleted(at(4));
        let nested_1 = Folder::child_of(&active_a, "nested-1", at(5));
        let nested_2 = Folder::child_of(&active_b, "nested-2", at(6));

        let cache = Arc::new(BookmarkCache::new());
        let (repo, store) = repo_with(
            StubFolderStore::with_folders(vec![
                active_a.clone(),
                active_b.clone(),
                trashed,
                nested_1,
                nested_2,
            ]),
            cache.clone(),
        );

        let top = repo.fetch_top_level_folders().await.unwrap();

        let mut titles: Vec<_> = top.iter().map(|f| f.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(store.fetch_all_calls.load(Ordering::SeqCst), 1);
        assert!(!cache.is_folders_initialized().await);
        assert!(cache.folders().await.is_empty());
    }

    #[tokio::test]
    async fn warm_top_level_fetch_stays_in_cache() {
        let active = Folder::new("active", at(1));
        let nested = Folder::child_of(&active, "nested", at(2));
        let cache = Arc::new(BookmarkCache::new());
        cache
            .reset_and_set_folders(vec![active.clone(), nested])
            .await;
        let (repo, store) = repo_with(StubFolderStore::with_folders(Vec::new()), cache);

        let top = repo.fetch_top_level_folders().await.unwrap();

        assert_eq!(top, vec![active]);
        assert_eq!(store.fetch_all_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_update_mirrors_into_initialized_cache() {
        let mut folder = Folder::new("A", at(1));
        let cache = Arc::new(BookmarkCache::new());
        cache.reset_and_set_folders(vec![folder.clone()]).await;
        let (repo, store) = repo_with(StubFolderStore::with_folders(Vec::new()), cache);

        folder.title = "B".to_string();
        repo.update_folder(folder.clone()).await.unwrap();

        let fetched = repo.fetch_folder(&folder.id).await.unwrap();
        assert_eq!(fetched.title, "B");
        assert_eq!(store.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_write_leaves_cache_untouched() {
        let folder = Folder::new("A", at(1));
        let cache = Arc::new(BookmarkCache::new());
        cache.reset_and_set_folders(vec![folder.clone()]).await;
        let (repo, _store) = repo_with(StubFolderStore::failing(), cache.clone());

        let mut renamed = folder.clone();
        renamed.title = "B".to_string();
        let err = repo.update_folder(renamed).await.unwrap_err();

        assert_eq!(err, RepositoryError::UpdateFailed);
        assert_eq!(cache.folder(&folder.id).await.unwrap(), folder);
    }

    #[tokio::test]
    async fn insert_while_uninitialized_skips_mirroring() {
        let cache = Arc::new(BookmarkCache::new());
        let (repo, store) = repo_with(StubFolderStore::with_folders(Vec::new()), cache.clone());

        repo.insert_folder(Folder::new("fresh", at(1))).await.unwrap();

        assert_eq!(store.write_calls.load(Ordering::SeqCst), 1);
        assert!(cache.folders().await.is_empty());
        assert!(!cache.is_folders_initialized().await);
    }

    #[tokio::test]
    async fn delete_mirrors_tombstone_as_upsert() {
        let mut folder = Folder::new("doomed", at(1));
        let cache = Arc::new(BookmarkCache::new());
        cache.reset_and_set_folders(vec![folder.clone()]).await;
        let (repo, _store) = repo_with(StubFolderStore::with_folders(Vec::new()), cache.clone());

        folder.mark_deleted(at(9));
        repo.delete_folder(folder.clone()).await.unwrap();

        // still physically present, filtered out by predicates
        let cached = cache.folder(&folder.id).await.unwrap();
        assert_eq!(cached.deleted_at, Some(at(9)));
        assert!(repo.fetch_top_level_folders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_error_maps_to_insert_failed() {
        let cache = Arc::new(BookmarkCache::new());
        let (repo, _store) = repo_with(StubFolderStore::failing(), cache);

        let err = repo.insert_folder(Folder::new("x", at(1))).await.unwrap_err();
        assert_eq!(err, RepositoryError::InsertFailed);
    }

    #[tokio::test]
    async fn delete_error_maps_to_delete_failed() {
        let cache = Arc::new(BookmarkCache::new());
        let (repo, _store) = repo_with(StubFolderStore::failing(), cache);

        let mut folder = Folder::new("x", at(1));
        folder.mark_deleted(at(2));
        let err = repo.delete_folder(folder).await.unwrap_err();
        assert_eq!(err, RepositoryError::DeleteFailed);
    }
}
