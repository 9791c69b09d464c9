//! Read-through/write-through repositories over the entity store.

pub mod clip_repository;
pub mod folder_repository;

pub use clip_repository::ClipRepository;
pub use folder_repository::FolderRepository;
