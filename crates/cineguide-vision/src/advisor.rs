//! Trait boundary for the external vision capability.

use async_trait::async_trait;

use cineguide_models::{SceneAnalysis, ShotTemplate, TargetRect};

use crate::error::VisionResult;

/// A capability that, given a still frame and optional hints, returns a
/// directional action and short advice.
///
/// The production implementation talks to an OpenAI-compatible endpoint;
/// tests substitute canned advisors.
#[async_trait]
pub trait SceneAdvisor: Send + Sync {
    /// Analyze one captured frame.
    ///
    /// # Arguments
    /// * `image` - Base64 data-URL still frame
    /// * `template` - Requested compositional preset, if any
    /// * `target` - Locked target box in capture-surface pixels, if any
    async fn advise(
        &self,
        image: &str,
        template: Option<ShotTemplate>,
        target: Option<TargetRect>,
    ) -> VisionResult<SceneAnalysis>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
