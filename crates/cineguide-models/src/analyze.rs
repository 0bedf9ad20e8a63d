//! Analyze API request/response schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{GuideAction, ShotTemplate, TargetRect};

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Base64 data-URL still frame from the capture surface
    pub image: String,
    /// Requested compositional preset
    #[serde(default)]
    pub template: Option<ShotTemplate>,
    /// Locked target box in capture-surface pixels
    #[serde(default)]
    pub target_locked: Option<TargetRect>,
}

impl AnalyzeRequest {
    /// Drop a degenerate target rectangle. The capture surface only locks
    /// regions wider than the drag threshold, so a zero-width box is
    /// treated as absent.
    pub fn normalized(mut self) -> Self {
        if let Some(rect) = self.target_locked {
            if !rect.is_valid() {
                self.target_locked = None;
            }
        }
        self
    }
}

/// Successful analysis reply: one directional action plus a short
/// cinematic tip (bounded to ~15 words by prompt instruction only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneAnalysis {
    pub action: GuideAction,
    pub advice: String,
}
