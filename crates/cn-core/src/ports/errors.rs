use thiserror::Error;

/// Opaque storage-level failure.
///
/// Repositories only branch on success/failure; the underlying cause is
/// carried solely so adapters can log it.
#[derive(Debug, Error)]
#[error("store failure: {0}")]
pub struct StoreError(#[from] anyhow::Error);

impl StoreError {
    pub fn msg(msg: impl Into<String>) -> Self {
        Self(anyhow::anyhow!(msg.into()))
    }
}

/// Domain-level repository failures surfaced to callers.
///
/// Store errors never cross the repository boundary verbatim; every failure
/// is re-classified into one of these. A cache miss while the cache is
/// uninitialized is not an error (it triggers store fallback); a miss while
/// initialized is a genuine `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,

    #[error("failed to fetch from store")]
    FetchFailed,

    #[error("failed to insert into store")]
    InsertFailed,

    #[error("failed to update store")]
    UpdateFailed,

    #[error("failed to delete from store")]
    DeleteFailed,

    /// Catch-all used on the clip read paths, which historically collapse
    /// every store failure into one bucket. See DESIGN.md.
    #[error("unknown repository error")]
    Unknown,
}
