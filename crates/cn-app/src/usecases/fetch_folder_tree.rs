use std::sync::Arc;

use tracing::debug;

use cn_core::ids::FolderId;
use cn_core::ports::RepositoryError;
use cn_core::Folder;

use crate::repositories::FolderRepository;
use crate::usecases::SortFolderTree;

/// Fetches a folder subtree and imposes the presentation order before it
/// reaches the UI: subfolders oldest-first, clips newest-first, at every
/// level.
pub struct FetchFolderTree {
    folders: Arc<FolderRepository>,
    sorter: SortFolderTree,
}

impl FetchFolderTree {
    pub fn from_ports(folders: Arc<FolderRepository>) -> Self {
        Self {
            folders,
            sorter: SortFolderTree::new(),
        }
    }

    #[tracing::instrument(name = "usecase.fetch_folder_tree.execute", skip(self), fields(folder_id = %id))]
    pub async fn execute(&self, id: &FolderId) -> Result<Folder, RepositoryError> {
        let folder = self.folders.fetch_folder(id).await?;
        debug!(subfolders = folder.folders.len(), clips = folder.clips.len(), "sorting folder tree");
        Ok(self.sorter.execute(folder))
    }
}
