use std::sync::Arc;

use tracing::debug;

use cn_core::ids::ClipId;
use cn_core::ports::{ClockPort, RepositoryError};
use cn_core::Clip;

use crate::repositories::ClipRepository;

/// Records that the user opened a clip.
///
/// Timestamps are minted here, above the repository layer: the repository
/// persists values as handed over and never touches `last_visited_at` or
/// `updated_at` itself.
pub struct VisitClip {
    clips: Arc<ClipRepository>,
    clock: Arc<dyn ClockPort>,
}

impl VisitClip {
    pub fn from_ports(clips: Arc<ClipRepository>, clock: Arc<dyn ClockPort>) -> Self {
        Self { clips, clock }
    }

    /// Stamp the visit and write it through. Returns the updated clip.
    #[tracing::instrument(name = "usecase.visit_clip.execute", skip(self), fields(clip_id = %id))]
    pub async fn execute(&self, id: &ClipId) -> Result<Clip, RepositoryError> {
        let mut clip = self.clips.fetch_clip(id).await?;
        clip.mark_visited(self.clock.now());
        self.clips.update_clip(clip.clone()).await?;
        debug!("recorded clip visit");
        Ok(clip)
    }
}
