use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::ids::FolderId;

/// A bookmark folder.
///
/// `folders` and `clips` hold *direct* children only; deeper descendants are
/// reached by recursing into each child's own `folders`. Deletion is logical:
/// a folder with `deleted_at` set stays in place and is filtered out by query
/// predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    /// `None` means the folder sits at the root of the tree.
    pub parent_folder_id: Option<FolderId>,
    pub title: String,
    /// Distance from the root: 0 for roots, parent depth + 1 otherwise.
    pub depth: u32,
    pub folders: Vec<Folder>,
    pub clips: Vec<Clip>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Folder {
    /// Create an empty root folder.
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: FolderId::new(),
            parent_folder_id: None,
            title: title.into(),
            depth: 0,
            folders: Vec::new(),
            clips: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Create an empty child folder; depth is derived from the parent.
    pub fn child_of(parent: &Folder, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: FolderId::new(),
            parent_folder_id: Some(parent.id.clone()),
            title: title.into(),
            depth: parent.depth + 1,
            folders: Vec::new(),
            clips: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Top level: no parent and not soft-deleted.
    pub fn is_top_level(&self) -> bool {
        self.parent_folder_id.is_none() && self.deleted_at.is_none()
    }

    /// Stamp the soft-delete marker. Repositories persist the value as-is;
    /// the tombstone is always set by the caller before the delete call.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}
