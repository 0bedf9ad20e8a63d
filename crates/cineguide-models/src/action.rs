//! Camera movement actions returned by the vision model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Directional instruction for the camera operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum GuideAction {
    /// Raise the camera
    Up,
    /// Lower the camera
    Down,
    /// Pan left
    Left,
    /// Pan right
    Right,
    /// Move toward the subject
    Forward,
    /// Move away from the subject
    Backward,
    /// The framing is already right
    Ok,
}

impl GuideAction {
    /// All actions the vision model may return.
    pub const ALL: &'static [GuideAction] = &[
        GuideAction::Up,
        GuideAction::Down,
        GuideAction::Left,
        GuideAction::Right,
        GuideAction::Forward,
        GuideAction::Backward,
        GuideAction::Ok,
    ];

    /// Wire representation, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideAction::Up => "UP",
            GuideAction::Down => "DOWN",
            GuideAction::Left => "LEFT",
            GuideAction::Right => "RIGHT",
            GuideAction::Forward => "FORWARD",
            GuideAction::Backward => "BACKWARD",
            GuideAction::Ok => "OK",
        }
    }

    /// Whether the operator should hold the current framing.
    pub fn is_settled(&self) -> bool {
        matches!(self, GuideAction::Ok)
    }
}

impl fmt::Display for GuideAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GuideAction {
    type Err = GuideActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP" => Ok(GuideAction::Up),
            "DOWN" => Ok(GuideAction::Down),
            "LEFT" => Ok(GuideAction::Left),
            "RIGHT" => Ok(GuideAction::Right),
            "FORWARD" => Ok(GuideAction::Forward),
            "BACKWARD" => Ok(GuideAction::Backward),
            "OK" => Ok(GuideAction::Ok),
            _ => Err(GuideActionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown action: {0}")]
pub struct GuideActionParseError(String);
