//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (repositories and
//! use cases) and infrastructure implementations. The entity store behind
//! these traits is opaque: the application layer only ever branches on
//! success or failure, never on the concrete backend error.

pub mod clip_store;
pub mod clock;
pub mod errors;
pub mod folder_store;

pub use clip_store::ClipStorePort;
pub use clock::ClockPort;
pub use errors::{RepositoryError, StoreError};
pub use folder_store::FolderStorePort;
