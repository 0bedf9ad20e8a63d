//! Shared data models for the Cineguide backend.
//!
//! This crate provides Serde-serializable types for:
//! - Camera movement actions and shot templates
//! - Target rectangles selected on the capture surface
//! - Snapshot history records
//! - Analyze API request/response schemas

pub mod action;
pub mod analyze;
pub mod snapshot;
pub mod template;

// Re-export common types
pub use action::{GuideAction, GuideActionParseError};
pub use analyze::{AnalyzeRequest, SceneAnalysis};
pub use snapshot::{NewSnapshot, Snapshot};
pub use template::{ShotTemplate, ShotTemplateParseError};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in capture-surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TargetRect {
    /// X coordinate of the top-left corner
    pub x: f64,
    /// Y coordinate of the top-left corner
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl TargetRect {
    /// Create a new target rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The rectangle spanning two corner points, axis-normalized.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x: a.0.min(b.0),
            y: a.1.min(b.1),
            width: (a.0 - b.0).abs(),
            height: (a.1 - b.1).abs(),
        }
    }

    /// A locked target must span a real horizontal extent.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0
    }
}
