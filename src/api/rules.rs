//! Rule endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult, SuccessResponse};
use crate::models::{AddRuleRequest, DeleteRuleRequest, Rule};
use crate::AppState;

/// GET /api/rules - List all rules in order.
pub async fn get_rules(State(state): State<AppState>) -> ApiResult<Json<Vec<Rule>>> {
    Ok(Json(state.repo.get_rules().await?))
}

/// POST /api/add-rule - Append a rule.
pub async fn add_rule(
    State(state): State<AppState>,
    Json(request): Json<AddRuleRequest>,
) -> ApiResult<SuccessResponse> {
    state.repo.add_rule(&request.rule, request.sip_count).await?;
    success()
}

/// POST /api/delete-rule - Delete a rule by position.
pub async fn delete_rule(
    State(state): State<AppState>,
    Json(request): Json<DeleteRuleRequest>,
) -> ApiResult<SuccessResponse> {
    if let Err(e) = state.repo.delete_rule(request.index).await {
        tracing::warn!(index = request.index, "Failed to delete rule: {}", e);
        return Err(e);
    }
    success()
}
