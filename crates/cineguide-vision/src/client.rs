//! OpenAI-compatible vision client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use cineguide_models::{SceneAnalysis, ShotTemplate, TargetRect};

use crate::advisor::SceneAdvisor;
use crate::error::{VisionError, VisionResult};
use crate::prompt::build_guidance_prompt;

/// Configuration for the vision endpoint.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Bearer key for the endpoint
    pub api_key: String,
    /// API base, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// Vision-capable model name
    pub model: String,
}

impl VisionConfig {
    /// Read configuration from environment variables. `VISION_API_KEY`
    /// wins over `OPENAI_API_KEY`; one of the two is required.
    pub fn from_env() -> VisionResult<Self> {
        let api_key = std::env::var("VISION_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| VisionError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: std::env::var("VISION_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: std::env::var("VISION_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
        })
    }
}

/// Chat-completions client for a vision-capable model.
pub struct VisionClient {
    config: VisionConfig,
    client: Client,
}

/// Chat API request.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
    /// Compact encoding keeps the payload small and fast
    detail: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Chat API response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl VisionClient {
    /// Create a new vision client.
    pub fn new(config: VisionConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Call the chat-completions API with the prompt and one image.
    async fn call_chat_api(
        &self,
        system_prompt: &str,
        image: &str,
    ) -> VisionResult<SceneAnalysis> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(system_prompt),
                },
                Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: "Analyze this scene.",
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image,
                                detail: "low",
                            },
                        },
                    ]),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Upstream { status, body });
        }

        let reply: ChatResponse = response.json().await?;

        let content = reply
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or(VisionError::EmptyReply)?;

        parse_analysis(content)
    }
}

/// Parse the model's JSON reply, tolerating markdown code fences.
pub(crate) fn parse_analysis(content: &str) -> VisionResult<SceneAnalysis> {
    let text = content.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);

    serde_json::from_str(text.trim()).map_err(|e| VisionError::Malformed(e.to_string()))
}

#[async_trait]
impl SceneAdvisor for VisionClient {
    async fn advise(
        &self,
        image: &str,
        template: Option<ShotTemplate>,
        target: Option<TargetRect>,
    ) -> VisionResult<SceneAnalysis> {
        let prompt = build_guidance_prompt(template, target);

        info!("Requesting scene analysis from {}", self.config.model);
        let analysis = self.call_chat_api(&prompt, image).await;

        if let Err(ref e) = analysis {
            warn!("Scene analysis failed: {e}");
        }

        analysis
    }

    fn name(&self) -> &'static str {
        "openai-vision"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineguide_models::GuideAction;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: String) -> VisionClient {
        VisionClient::new(VisionConfig {
            api_key: "test-key".to_string(),
            base_url,
            model: "gpt-4o".to_string(),
        })
    }

    #[test]
    fn test_parse_plain_reply() {
        let analysis =
            parse_analysis(r#"{"action":"LEFT","advice":"Lower the frame for drama."}"#).unwrap();
        assert_eq!(analysis.action, GuideAction::Left);
        assert_eq!(analysis.advice, "Lower the frame for drama.");
    }

    #[test]
    fn test_parse_fenced_reply() {
        let analysis = parse_analysis(
            "```json\n{\"action\":\"OK\",\"advice\":\"Hold it right there.\"}\n```",
        )
        .unwrap();
        assert_eq!(analysis.action, GuideAction::Ok);
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        let err = parse_analysis(r#"{"action":"SPIN","advice":"Whirl!"}"#).unwrap_err();
        assert!(matches!(err, VisionError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_advise_parses_successful_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": {
                        "content": "{\"action\":\"FORWARD\",\"advice\":\"Step in, fill the frame.\"}"
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let analysis = client
            .advise("data:image/jpeg;base64,xyz", None, None)
            .await
            .unwrap();
        assert_eq!(analysis.action, GuideAction::Forward);
    }

    #[tokio::test]
    async fn test_advise_empty_reply_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "choices": [{ "message": { "content": null } }]
                })),
            )
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let err = client
            .advise("data:image/jpeg;base64,xyz", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, VisionError::EmptyReply));
    }

    #[tokio::test]
    async fn test_advise_upstream_failure_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let err = client
            .advise("data:image/jpeg;base64,xyz", None, None)
            .await
            .unwrap_err();
        match err {
            VisionError::Upstream { status, .. } => assert_eq!(status, 429),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
