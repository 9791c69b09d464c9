//! In-memory mirror of the folder and clip sets with per-kind initialization.
//! 文件夹与剪藏集合的内存镜像，两类数据独立初始化。

use std::collections::HashMap;

use tokio::sync::Mutex;

use cn_core::ids::{ClipId, FolderId};
use cn_core::{Clip, Folder};

/// Session-scoped cache shared by every repository instance.
/// 会话级缓存，当前会话的所有仓库共享同一实例。
///
/// All access goes through one mutex, so no caller ever observes a
/// half-applied mutation. A mapping is a trusted complete mirror of the
/// store only while its initialized flag is true; individual upserts never
/// flip that flag — only the bulk `reset_and_set_*` operations do.
///
/// Constructed once per session and injected; cleared via [`reset`] on
/// sign-out.
///
/// [`reset`]: BookmarkCache::reset
pub struct BookmarkCache {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    folders: HashMap<FolderId, Folder>,
    clips: HashMap<ClipId, Clip>,
    folders_initialized: bool,
    clips_initialized: bool,
}

impl BookmarkCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Unordered snapshot of every cached folder, soft-deleted included.
    /// Legitimately empty while uninitialized.
    pub async fn folders(&self) -> Vec<Folder> {
        let inner = self.inner.lock().await;
        inner.folders.values().cloned().collect()
    }

    /// Unordered snapshot of every cached clip, soft-deleted included.
    pub async fn clips(&self) -> Vec<Clip> {
        let inner = self.inner.lock().await;
        inner.clips.values().cloned().collect()
    }

    /// Single folder by id. Absence is not an error here; the repository
    /// decides what a miss means based on the initialized flag.
    pub async fn folder(&self, id: &FolderId) -> Option<Folder> {
        let inner = self.inner.lock().await;
        inner.folders.get(id).cloned()
    }

    pub async fn clip(&self, id: &ClipId) -> Option<Clip> {
        let inner = self.inner.lock().await;
        inner.clips.get(id).cloned()
    }

    /// Upsert one folder into an already-populated mirror. Never establishes
    /// initialization.
    pub async fn set_folder(&self, folder: Folder) {
        let mut inner = self.inner.lock().await;
        inner.folders.insert(folder.id.clone(), folder);
    }

    pub async fn set_clip(&self, clip: Clip) {
        let mut inner = self.inner.lock().await;
        inner.clips.insert(clip.id.clone(), clip);
    }

    /// Atomically replace the folder mirror and mark it authoritative.
    /// This is the only path that turns folder initialization on.
    /// 原子替换文件夹镜像并置为可信，这是唯一的初始化路径。
    pub async fn reset_and_set_folders(&self, folders: Vec<Folder>) {
        let mut inner = self.inner.lock().await;
        inner.folders = folders.into_iter().map(|f| (f.id.clone(), f)).collect();
        inner.folders_initialized = true;
    }

    /// Atomically replace the clip mirror and mark it authoritative.
    pub async fn reset_and_set_clips(&self, clips: Vec<Clip>) {
        let mut inner = self.inner.lock().await;
        inner.clips = clips.into_iter().map(|c| (c.id.clone(), c)).collect();
        inner.clips_initialized = true;
    }

    /// Drop both mirrors and return to the uninitialized state (sign-out).
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.folders.clear();
        inner.clips.clear();
        inner.folders_initialized = false;
        inner.clips_initialized = false;
    }

    pub async fn is_folders_initialized(&self) -> bool {
        self.inner.lock().await.folders_initialized
    }

    pub async fn is_clips_initialized(&self) -> bool {
        self.inner.lock().await.clips_initialized
    }

    /// True only when both kinds are authoritative. Full-tree reads that
    /// span folders and clips must check this, not one per-kind flag.
    pub async fn is_initialized(&self) -> bool {
        let inner = self.inner.lock().await;
        inner.folders_initialized && inner.clips_initialized
    }
}

impl Default for BookmarkCache {
    fn default() -> Self {
        Self::new()
    }
}
