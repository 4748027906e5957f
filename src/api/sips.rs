//! Player drink endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult, SuccessResponse};
use crate::models::{AddSipRequest, SipData};
use crate::AppState;

/// GET /api/sip-data - Get every player's recorded drinks.
pub async fn get_sip_data(State(state): State<AppState>) -> ApiResult<Json<SipData>> {
    Ok(Json(state.repo.get_sip_data().await?))
}

/// POST /api/add-sip - Append a drink increment for a player.
pub async fn add_sip(
    State(state): State<AppState>,
    Json(request): Json<AddSipRequest>,
) -> ApiResult<SuccessResponse> {
    state.repo.add_sip(&request.username, request.count).await?;
    success()
}
