//! Client-side logic for the camera guidance flow.
//!
//! This crate provides:
//! - Box-selection gesture handling for the capture surface
//! - Still-frame capture composition over a pluggable `FrameSource`
//! - The analyze session: one in-flight request, cached history
//! - The guidance presentation model
//!
//! Rendering (video element, overlay styling, animation) belongs to the
//! host UI and is not modeled here.

pub mod analyze;
pub mod capture;
pub mod error;
pub mod gesture;
pub mod guidance;

pub use analyze::{AnalysisSession, AnalyzeClient, AnalyzePhase};
pub use capture::{CaptureHandle, CaptureSurface, EncodedFrame, FrameSource};
pub use error::ClientError;
pub use gesture::{PointerKind, PointerSample, SelectionGesture, MIN_TARGET_WIDTH};
pub use guidance::GuidancePanel;
