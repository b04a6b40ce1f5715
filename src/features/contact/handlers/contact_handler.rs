//! Contact submission handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::{ContactRequestDto, ProviderReceipt};
use crate::features::contact::services::ContactService;
use crate::shared::constants::MSG_EMAIL_SENT;
use crate::shared::types::ApiResponse;

/// Relay a contact form submission
///
/// Validates the submission and sends one notification email to the site owner.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Email sent", body = ApiResponse<ProviderReceipt>),
        (status = 400, description = "Missing required fields or invalid email format"),
        (status = 500, description = "Email provider call failed")
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<ContactRequestDto>,
) -> Result<Json<ApiResponse<ProviderReceipt>>> {
    let receipt = service.submit(dto).await?;

    Ok(Json(ApiResponse::success(
        Some(receipt),
        Some(MSG_EMAIL_SENT.to_string()),
    )))
}
