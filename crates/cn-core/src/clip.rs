use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ClipId, FolderId};

/// Everything we know about the clipped page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMetadata {
    pub url: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    /// Raw screenshot bytes captured at clip time, if any.
    pub screenshot: Option<Vec<u8>>,
}

impl UrlMetadata {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            thumbnail_url: None,
            screenshot: None,
        }
    }
}

/// A clipped bookmark. Always belongs to exactly one folder; there are no
/// rootless clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,
    pub folder_id: FolderId,
    pub url_metadata: UrlMetadata,
    pub memo: String,
    /// `None` means the clip has never been opened.
    pub last_visited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Clip {
    pub fn new(folder_id: FolderId, url_metadata: UrlMetadata, now: DateTime<Utc>) -> Self {
        Self {
            id: ClipId::new(),
            folder_id,
            url_metadata,
            memo: String::new(),
            last_visited_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    pub fn is_unvisited(&self) -> bool {
        self.last_visited_at.is_none()
    }

    /// Record a visit. Also bumps `updated_at` so write-through mirrors stay
    /// in step with the store row.
    pub fn mark_visited(&mut self, at: DateTime<Utc>) {
        self.last_visited_at = Some(at);
        self.updated_at = at;
    }

    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}
