//! Analyze client and session state.

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::warn;

use cineguide_models::{AnalyzeRequest, SceneAnalysis, ShotTemplate, Snapshot, TargetRect};

use crate::capture::EncodedFrame;
use crate::error::ClientError;

/// HTTP client for the analyze and snapshot endpoints.
pub struct AnalyzeClient {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl AnalyzeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issue one analysis request. No retry; a failure is reported once.
    pub async fn analyze(
        &self,
        frame: &EncodedFrame,
        template: Option<ShotTemplate>,
        target: Option<TargetRect>,
    ) -> Result<SceneAnalysis, ClientError> {
        let request = AnalyzeRequest {
            image: frame.as_str().to_string(),
            template,
            target_locked: target,
        };

        let response = self
            .http
            .post(format!("{}/api/analyze", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "Failed to analyze scene".to_string());
            return Err(ClientError::Analyze(message));
        }

        Ok(response.json().await?)
    }

    /// Fetch the full shot history, newest first.
    pub async fn snapshots(&self) -> Result<Vec<Snapshot>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/snapshots", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::History(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

/// Submission state reported to the UI. The capture affordance stays
/// disabled while `Pending`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzePhase {
    Idle,
    Pending,
    Succeeded(SceneAnalysis),
    Failed(String),
}

impl AnalyzePhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalyzePhase::Pending)
    }
}

/// One user session: at most one in-flight analysis, with the history
/// list cached until a new snapshot lands on the server.
pub struct AnalysisSession {
    client: AnalyzeClient,
    phase: Mutex<AnalyzePhase>,
    history: Mutex<Option<Vec<Snapshot>>>,
}

impl AnalysisSession {
    pub fn new(client: AnalyzeClient) -> Self {
        Self {
            client,
            phase: Mutex::new(AnalyzePhase::Idle),
            history: Mutex::new(None),
        }
    }

    /// Current submission phase.
    pub async fn phase(&self) -> AnalyzePhase {
        self.phase.lock().await.clone()
    }

    /// Whether the shutter should accept another press.
    pub async fn shutter_enabled(&self) -> bool {
        !self.phase.lock().await.is_pending()
    }

    /// Submit a captured frame. A second submit while one is in flight is
    /// refused.
    pub async fn submit(
        &self,
        frame: &EncodedFrame,
        template: Option<ShotTemplate>,
        target: Option<TargetRect>,
    ) -> Result<SceneAnalysis, ClientError> {
        {
            let mut phase = self.phase.lock().await;
            if phase.is_pending() {
                return Err(ClientError::AlreadyPending);
            }
            *phase = AnalyzePhase::Pending;
        }

        let result = self.client.analyze(frame, template, target).await;

        let mut phase = self.phase.lock().await;
        match result {
            Ok(analysis) => {
                *phase = AnalyzePhase::Succeeded(analysis.clone());
                // A new snapshot exists on the server; drop the stale list.
                self.history.lock().await.take();
                Ok(analysis)
            }
            Err(e) => {
                warn!("Analysis failed: {e}");
                *phase = AnalyzePhase::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Shot history, fetched on first use and re-fetched after a
    /// successful submit invalidates the cache.
    pub async fn history(&self) -> Result<Vec<Snapshot>, ClientError> {
        {
            let cache = self.history.lock().await;
            if let Some(list) = cache.as_ref() {
                return Ok(list.clone());
            }
        }

        let fresh = self.client.snapshots().await?;
        *self.history.lock().await = Some(fresh.clone());
        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn frame() -> EncodedFrame {
        EncodedFrame::from_data_url("data:image/jpeg;base64,xyz")
    }

    fn analysis_body() -> serde_json::Value {
        json!({"action": "LEFT", "advice": "Lower the frame for drama."})
    }

    fn snapshot_body() -> serde_json::Value {
        json!([{
            "id": "s1",
            "advice": "Lower the frame for drama.",
            "action": "LEFT",
            "template": null,
            "targetLocked": null,
            "createdAt": "2026-08-06T12:00:00Z"
        }])
    }

    #[tokio::test]
    async fn test_submit_success_reports_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(analysis_body()))
            .mount(&server)
            .await;

        let session = AnalysisSession::new(AnalyzeClient::new(server.uri()));
        let analysis = session.submit(&frame(), None, None).await.unwrap();
        assert_eq!(analysis.advice, "Lower the frame for drama.");
        assert_eq!(session.phase().await, AnalyzePhase::Succeeded(analysis));
        assert!(session.shutter_enabled().await);
    }

    #[tokio::test]
    async fn test_submit_failure_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"message": "Failed to analyze image"})),
            )
            .mount(&server)
            .await;

        let session = AnalysisSession::new(AnalyzeClient::new(server.uri()));
        let err = session.submit(&frame(), None, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to analyze image");
        assert!(matches!(session.phase().await, AnalyzePhase::Failed(_)));
    }

    #[tokio::test]
    async fn test_second_submit_refused_while_pending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(analysis_body())
                    .set_delay(Duration::from_millis(200)),
            )
            .mount(&server)
            .await;

        let session = std::sync::Arc::new(AnalysisSession::new(AnalyzeClient::new(server.uri())));

        let racing = {
            let session = std::sync::Arc::clone(&session);
            tokio::spawn(async move { session.submit(&frame(), None, None).await })
        };

        // Let the first request take flight, then press the shutter again.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!session.shutter_enabled().await);
        let err = session.submit(&frame(), None, None).await.unwrap_err();
        assert!(matches!(err, ClientError::AlreadyPending));

        racing.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_history_cached_until_submit_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/snapshots"))
            .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body()))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(analysis_body()))
            .mount(&server)
            .await;

        let session = AnalysisSession::new(AnalyzeClient::new(server.uri()));

        // Two reads, one fetch.
        session.history().await.unwrap();
        session.history().await.unwrap();

        // Success invalidates; the next read fetches again.
        session.submit(&frame(), None, None).await.unwrap();
        let listed = session.history().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "s1");
    }
}
