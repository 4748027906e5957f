//! REST API module.
//!
//! Contains all API routes and handlers following the dashboard contract.

mod refresh;
mod rules;
mod sips;

pub use refresh::*;
pub use rules::*;
pub use sips::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Acknowledgement returned by every mutating endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl IntoResponse for SuccessResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<T, crate::errors::AppError>;

/// Create a successful acknowledgement.
pub fn success() -> ApiResult<SuccessResponse> {
    Ok(SuccessResponse { success: true })
}
