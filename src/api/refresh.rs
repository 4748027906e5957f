//! Refresh marker and reset endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult, SuccessResponse};
use crate::models::LastRefresh;
use crate::AppState;

/// GET /api/last-refresh - Get the refresh marker for change detection.
pub async fn get_last_refresh(State(state): State<AppState>) -> ApiResult<Json<LastRefresh>> {
    let timestamp = state.repo.get_last_refresh().await?;
    Ok(Json(LastRefresh { timestamp }))
}

/// POST /api/refresh - Ask every dashboard to reload without changing data.
pub async fn refresh(State(state): State<AppState>) -> ApiResult<SuccessResponse> {
    let timestamp = state.repo.refresh().await?;
    tracing::info!(timestamp, "refresh requested");
    success()
}

/// POST /api/reset-data - Clear all players and rules.
pub async fn reset_data(State(state): State<AppState>) -> ApiResult<SuccessResponse> {
    state.repo.reset().await?;
    success()
}
