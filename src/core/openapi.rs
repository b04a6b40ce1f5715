use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::health::handlers as health_handlers;
use crate::shared::types::{ApiResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        contact_handlers::submit_contact,
        health_handlers::health_check,
    ),
    components(
        schemas(
            HealthResponse,
            contact_dtos::ContactRequestDto,
            contact_dtos::ProviderReceipt,
            ApiResponse<contact_dtos::ProviderReceipt>,
        )
    ),
    tags(
        (name = "contact", description = "Website contact form relay"),
        (name = "health", description = "Liveness probe"),
    ),
    info(
        title = "TopAi24 Contact API",
        version = "0.1.0",
        description = "Contact form relay for the TopAi24 website",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
