//! Guidance presentation model.

use cineguide_models::{GuideAction, SceneAnalysis};

/// Client-local state for the guidance overlay. Dismissing never touches
/// the history store.
#[derive(Debug, Default)]
pub struct GuidancePanel {
    current: Option<SceneAnalysis>,
}

impl GuidancePanel {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Show the latest analysis.
    pub fn show(&mut self, analysis: SceneAnalysis) {
        self.current = Some(analysis);
    }

    /// Clear the displayed result.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The action/advice pair to render, if any.
    pub fn current(&self) -> Option<&SceneAnalysis> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

/// Short operator-facing label for each action.
pub fn action_label(action: GuideAction) -> &'static str {
    match action {
        GuideAction::Up => "Raise the camera",
        GuideAction::Down => "Lower the camera",
        GuideAction::Left => "Pan left",
        GuideAction::Right => "Pan right",
        GuideAction::Forward => "Move closer",
        GuideAction::Backward => "Step back",
        GuideAction::Ok => "Hold this framing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_renders_nothing_until_shown() {
        let mut panel = GuidancePanel::new();
        assert!(!panel.is_visible());

        panel.show(SceneAnalysis {
            action: GuideAction::Right,
            advice: "Let the subject lead the frame.".to_string(),
        });
        assert!(panel.is_visible());
        assert_eq!(panel.current().unwrap().action, GuideAction::Right);
    }

    #[test]
    fn test_dismiss_clears_current() {
        let mut panel = GuidancePanel::new();
        panel.show(SceneAnalysis {
            action: GuideAction::Ok,
            advice: "Hold it.".to_string(),
        });
        panel.dismiss();
        assert!(panel.current().is_none());
    }

    #[test]
    fn test_every_action_has_a_label() {
        for action in GuideAction::ALL {
            assert!(!action_label(*action).is_empty());
        }
    }
}
