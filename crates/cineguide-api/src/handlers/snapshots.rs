//! Shot history handler.

use axum::extract::State;
use axum::Json;
use tracing::warn;

use cineguide_models::Snapshot;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// All snapshots, newest first.
pub async fn list_snapshots(State(state): State<AppState>) -> ApiResult<Json<Vec<Snapshot>>> {
    let snapshots = state.store.list().await.map_err(|e| {
        warn!("Failed to list snapshots: {e}");
        ApiError::HistoryUnavailable
    })?;

    Ok(Json(snapshots))
}
