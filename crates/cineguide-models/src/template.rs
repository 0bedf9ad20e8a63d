//! Compositional shot templates selectable in the capture UI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Compositional preset the operator can request for a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ShotTemplate {
    /// Straight-down framing
    Overhead,
    /// Low-angle framing looking up
    UnderAngle,
    /// Cinematic wide framing
    Wide,
    /// Shallow portrait framing
    Portrait,
}

impl ShotTemplate {
    /// All selectable templates.
    pub const ALL: &'static [ShotTemplate] = &[
        ShotTemplate::Overhead,
        ShotTemplate::UnderAngle,
        ShotTemplate::Wide,
        ShotTemplate::Portrait,
    ];

    /// Wire representation, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotTemplate::Overhead => "overhead",
            ShotTemplate::UnderAngle => "under-angle",
            ShotTemplate::Wide => "wide",
            ShotTemplate::Portrait => "portrait",
        }
    }
}

impl fmt::Display for ShotTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShotTemplate {
    type Err = ShotTemplateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overhead" => Ok(ShotTemplate::Overhead),
            "under-angle" => Ok(ShotTemplate::UnderAngle),
            "wide" => Ok(ShotTemplate::Wide),
            "portrait" => Ok(ShotTemplate::Portrait),
            _ => Err(ShotTemplateParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown shot template: {0}")]
pub struct ShotTemplateParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parse() {
        assert_eq!(
            "under-angle".parse::<ShotTemplate>().unwrap(),
            ShotTemplate::UnderAngle
        );
        assert_eq!("Wide".parse::<ShotTemplate>().unwrap(), ShotTemplate::Wide);
        assert!("dutch".parse::<ShotTemplate>().is_err());
    }

    #[test]
    fn test_template_serde_kebab() {
        let json = serde_json::to_string(&ShotTemplate::UnderAngle).unwrap();
        assert_eq!(json, "\"under-angle\"");
        let parsed: ShotTemplate = serde_json::from_str("\"overhead\"").unwrap();
        assert_eq!(parsed, ShotTemplate::Overhead);
    }

    #[test]
    fn test_template_display_round_trip() {
        for template in ShotTemplate::ALL {
            assert_eq!(
                template.to_string().parse::<ShotTemplate>().unwrap(),
                *template
            );
        }
    }
}
