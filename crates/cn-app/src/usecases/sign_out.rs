use std::sync::Arc;

use tracing::info;

use crate::cache::BookmarkCache;

/// Session teardown: clears the bookmark cache on behalf of the
/// authentication collaborator so the next session starts cold.
pub struct SignOut {
    cache: Arc<BookmarkCache>,
}

impl SignOut {
    pub fn from_ports(cache: Arc<BookmarkCache>) -> Self {
        Self { cache }
    }

    #[tracing::instrument(name = "usecase.sign_out.execute", skip(self))]
    pub async fn execute(&self) {
        info!("clearing bookmark cache on sign-out");
        self.cache.reset().await;
    }
}
