//! Snapshot history records.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{GuideAction, SceneAnalysis, ShotTemplate, TargetRect};

/// One persisted analysis result. Created exactly once when a scene
/// analysis completes; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Store-assigned unique id
    pub id: String,
    /// Cinematic tip from the vision model
    pub advice: String,
    /// Directional instruction, if one was returned
    pub action: Option<GuideAction>,
    /// Template requested with the originating capture
    pub template: Option<ShotTemplate>,
    /// Target box locked on the capture surface
    pub target_locked: Option<TargetRect>,
    /// Store-assigned creation time; orders the history
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a snapshot. `id` and `created_at` are assigned by the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSnapshot {
    pub advice: String,
    pub action: Option<GuideAction>,
    pub template: Option<ShotTemplate>,
    pub target_locked: Option<TargetRect>,
}

impl NewSnapshot {
    /// Build the insert record for a completed analysis.
    pub fn from_analysis(
        analysis: &SceneAnalysis,
        template: Option<ShotTemplate>,
        target_locked: Option<TargetRect>,
    ) -> Self {
        Self {
            advice: analysis.advice.clone(),
            action: Some(analysis.action),
            template,
            target_locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_wire_format() {
        let snapshot = Snapshot {
            id: "abc".to_string(),
            advice: "Lower the frame for drama.".to_string(),
            action: Some(GuideAction::Left),
            template: Some(ShotTemplate::Overhead),
            target_locked: Some(TargetRect::new(10.0, 20.0, 100.0, 50.0)),
            created_at: "2026-08-06T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["action"], "LEFT");
        assert_eq!(json["template"], "overhead");
        assert_eq!(json["targetLocked"]["width"], 100.0);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_from_analysis_copies_fields() {
        let analysis = SceneAnalysis {
            action: GuideAction::Forward,
            advice: "Step in, fill the frame.".to_string(),
        };
        let new = NewSnapshot::from_analysis(&analysis, None, None);
        assert_eq!(new.action, Some(GuideAction::Forward));
        assert_eq!(new.advice, analysis.advice);
    }
}
