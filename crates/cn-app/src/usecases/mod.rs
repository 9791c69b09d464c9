//! UI-facing use cases.

pub mod fetch_folder_tree;
pub mod seed_bookmark_cache;
pub mod sign_out;
pub mod sort_folder_tree;
pub mod visit_clip;

pub use fetch_folder_tree::FetchFolderTree;
pub use seed_bookmark_cache::SeedBookmarkCache;
pub use sign_out::SignOut;
pub use sort_folder_tree::SortFolderTree;
pub use visit_clip::VisitClip;
