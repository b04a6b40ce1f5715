use axum::Json;

use crate::shared::constants::MSG_HEALTH_OK;
use crate::shared::types::HealthResponse;

/// Health check
///
/// Depends on nothing else, so it answers OK even when the email provider is down.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_HEALTH_OK.to_string(),
    })
}
