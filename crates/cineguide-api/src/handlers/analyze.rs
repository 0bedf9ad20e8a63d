//! Scene analysis handler.

use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use cineguide_models::{AnalyzeRequest, NewSnapshot, SceneAnalysis};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Forward a captured frame to the vision model, record the result, and
/// return it.
///
/// The snapshot is written before the response goes out, so a result the
/// client sees is always already recorded. The converse (a recorded
/// snapshot whose response is lost) can happen and is accepted.
pub async fn analyze_scene(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<SceneAnalysis>> {
    if request.image.trim().is_empty() {
        return Err(ApiError::bad_request("image must not be empty"));
    }

    // A degenerate target rectangle never reaches the prompt.
    let request = request.normalized();

    let analysis = state
        .advisor
        .advise(&request.image, request.template, request.target_locked)
        .await
        .map_err(|e| {
            warn!("Scene analysis failed: {e}");
            ApiError::AnalysisFailed
        })?;

    let snapshot = state
        .store
        .create(NewSnapshot::from_analysis(
            &analysis,
            request.template,
            request.target_locked,
        ))
        .await
        .map_err(|e| {
            warn!("Failed to record snapshot: {e}");
            ApiError::AnalysisFailed
        })?;

    info!(
        "Recorded snapshot {} with action {}",
        snapshot.id, analysis.action
    );

    Ok(Json(analysis))
}
