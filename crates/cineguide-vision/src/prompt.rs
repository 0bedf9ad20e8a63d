//! System prompt construction for guidance requests.

use cineguide_models::{ShotTemplate, TargetRect};

/// Fixed role statement sent with every request.
const ROLE: &str =
    "You are a professional videography guide. Analyze the image to provide optimal angles and lighting.";

/// Output contract the model must follow.
const OUTPUT_CONTRACT: &str = "Return a JSON object with:\n\
- \"action\": One of \"UP\", \"DOWN\", \"LEFT\", \"RIGHT\", \"FORWARD\", \"BACKWARD\", \"OK\" indicating how the user should move the camera.\n\
- \"advice\": A short, cinematic tip (max 15 words).";

/// Build the system prompt for one analysis request.
///
/// The template and target lines are appended only when present.
pub fn build_guidance_prompt(
    template: Option<ShotTemplate>,
    target: Option<TargetRect>,
) -> String {
    let mut prompt = String::from(ROLE);

    if let Some(t) = template {
        prompt.push('\n');
        prompt.push_str(&format!("The user wants a \"{t}\" shot."));
    }

    if let Some(rect) = target {
        prompt.push('\n');
        prompt.push_str(&format!(
            "A target is locked at position: x={}, y={}, width={}, height={}.",
            rect.x, rect.y, rect.width, rect.height
        ));
    }

    prompt.push('\n');
    prompt.push_str(OUTPUT_CONTRACT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_prompt_has_role_and_contract_only() {
        let prompt = build_guidance_prompt(None, None);
        assert!(prompt.starts_with(ROLE));
        assert!(prompt.contains("\"advice\""));
        assert!(!prompt.contains("shot."));
        assert!(!prompt.contains("target is locked"));
    }

    #[test]
    fn test_template_line_appended_when_present() {
        let prompt = build_guidance_prompt(Some(ShotTemplate::Wide), None);
        assert!(prompt.contains("The user wants a \"wide\" shot."));
    }

    #[test]
    fn test_target_line_states_coordinates() {
        let prompt =
            build_guidance_prompt(None, Some(TargetRect::new(10.0, 20.0, 100.0, 50.0)));
        assert!(prompt.contains("x=10, y=20, width=100, height=50"));
    }
}
