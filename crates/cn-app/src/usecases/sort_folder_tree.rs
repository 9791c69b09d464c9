use cn_core::Folder;

/// Recursively orders a fetched folder subtree for presentation.
///
/// Child folders sort ascending by creation time; clips sort descending
/// (newest first). The two directions differ on purpose — folder lists read
/// oldest-first while clip lists surface recent captures. Pure and
/// idempotent; ids, titles, depths and timestamps pass through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SortFolderTree;

impl SortFolderTree {
    pub fn new() -> Self {
        Self
    }

    /// Sort every level of the subtree, depth-first. Expects the folder's
    /// descendants to be fully populated already.
    pub fn execute(&self, mut folder: Folder) -> Folder {
        folder.folders = folder
            .folders
            .into_iter()
            .map(|child| self.execute(child))
            .collect();
        // Vec::sort_by is stable, so equal timestamps keep their input order
        folder.folders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        folder.clips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        folder
    }
}
