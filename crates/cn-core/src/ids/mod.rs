//! ID type wrappers for type safety.

pub mod bookmark;
mod id_macro;

pub use bookmark::{ClipId, FolderId};
