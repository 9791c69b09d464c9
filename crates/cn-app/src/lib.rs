//! Clipnest Application Layer
//!
//! The hierarchical bookmark cache, the read-through/write-through
//! repositories sitting between the domain and the entity store, and the
//! UI-facing use cases (tree ordering, cache seeding, sign-out, visiting).

pub mod adapters;
pub mod cache;
pub mod repositories;
pub mod usecases;

pub use cache::BookmarkCache;
pub use repositories::{ClipRepository, FolderRepository};
