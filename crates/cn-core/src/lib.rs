//! # cn-core
//!
//! Core domain models and store contracts for Clipnest.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod clip;
pub mod folder;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clip::{Clip, UrlMetadata};
pub use folder::Folder;
pub use ids::{ClipId, FolderId};
pub use ports::{ClipStorePort, ClockPort, FolderStorePort, RepositoryError, StoreError};
