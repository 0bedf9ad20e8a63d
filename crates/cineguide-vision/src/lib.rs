//! Vision model client for scene analysis.
//!
//! This crate provides:
//! - `SceneAdvisor`: trait boundary for the external vision capability
//! - `VisionClient`: OpenAI-compatible chat-completions implementation
//! - System prompt construction for guidance requests

pub mod advisor;
pub mod client;
pub mod error;
pub mod prompt;

pub use advisor::SceneAdvisor;
pub use client::{VisionClient, VisionConfig};
pub use error::{VisionError, VisionResult};
pub use prompt::build_guidance_prompt;
