use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::contact::{routes as contact_routes, ContactService};
use crate::features::health::routes as health_routes;

/// Assemble every route and cross-cutting layer of the service
pub fn build_router(
    contact_service: Arc<ContactService>,
    app: &AppConfig,
    swagger: &SwaggerConfig,
) -> Router {
    let mut router = Router::new()
        .merge(contact_routes::routes(contact_service))
        .merge(health_routes::routes());

    if swagger.enabled {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: swagger.title.clone(),
            version: swagger.version.clone(),
            description: swagger.description.clone(),
        }
        .modify(&mut openapi);

        router =
            router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    with_layers(router, app)
}

/// Fallbacks and cross-cutting layers applied on top of the routes
fn with_layers(router: Router, app: &AppConfig) -> Router {
    router
        // Known path with an unsupported method is answered like an unknown path
        .method_not_allowed_fallback(middleware::route_not_found)
        .fallback(middleware::route_not_found)
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use axum_test::TestServer;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::faker::name::en::Name;
    use fake::Fake;
    use serde_json::{json, Value};

    use crate::core::middleware::handle_panic;
    use crate::shared::constants::{
        MSG_DELIVERY_FAILED, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS, MSG_ROUTE_NOT_FOUND,
    };
    use super::with_layers;
    use crate::shared::test_helpers::{test_app_config, test_server, MockTransport};
    use std::sync::Arc;

    fn valid_body() -> Value {
        json!({"name": "A", "email": "a@b.com", "subject": "S", "message": "M"})
    }

    #[tokio::test]
    async fn test_contact_success_returns_provider_payload() {
        let transport = Arc::new(MockTransport::succeeding());
        let server = test_server(transport.clone(), false);

        let response = server.post("/api/contact").json(&valid_body()).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "message": "Email sent successfully!",
            "data": {"id": "test-email-id"}
        }));

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Contact Form Submission: S");
        for needle in ["A", "a@b.com", "S", "M"] {
            assert!(sent[0].html.contains(needle), "body should contain {:?}", needle);
        }
    }

    #[tokio::test]
    async fn test_contact_missing_fields_return_400() {
        let transport = Arc::new(MockTransport::succeeding());
        let server = test_server(transport.clone(), false);

        for field in ["name", "email", "subject", "message"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);

            let response = server.post("/api/contact").json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({"success": false, "error": MSG_MISSING_FIELDS}));
        }

        let mut body = valid_body();
        body["subject"] = json!("");
        server
            .post("/api/contact")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_contact_invalid_email_returns_400() {
        let transport = Arc::new(MockTransport::succeeding());
        let server = test_server(transport.clone(), false);

        for email in ["ab.com", "a@bcom"] {
            let mut body = valid_body();
            body["email"] = json!(email);

            let response = server.post("/api/contact").json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({"success": false, "error": MSG_INVALID_EMAIL}));
        }

        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_contact_malformed_json_returns_400_envelope() {
        let server = test_server(Arc::new(MockTransport::succeeding()), false);

        let response = server
            .post("/api/contact")
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_contact_provider_failure_hides_details_in_production() {
        let server = test_server(Arc::new(MockTransport::rejecting(401, "Invalid API key")), false);

        let response = server.post("/api/contact").json(&valid_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"success": false, "error": MSG_DELIVERY_FAILED}));
    }

    #[tokio::test]
    async fn test_contact_provider_failure_includes_details_in_development() {
        let server = test_server(Arc::new(MockTransport::rejecting(401, "Invalid API key")), true);

        let response = server.post("/api/contact").json(&valid_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "success": false,
            "error": MSG_DELIVERY_FAILED,
            "details": "Invalid API key"
        }));
    }

    #[tokio::test]
    async fn test_contact_transport_failure_returns_500() {
        let server = test_server(Arc::new(MockTransport::unreachable()), false);

        server
            .post("/api/contact")
            .json(&valid_body())
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_generated_submissions_each_dispatch_once() {
        let transport = Arc::new(MockTransport::succeeding());
        let server = test_server(transport.clone(), false);

        for _ in 0..5 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let subject: String = Sentence(2..5).fake();
            let message: String = Paragraph(1..3).fake();

            server
                .post("/api/contact")
                .json(&json!({
                    "name": name,
                    "email": email,
                    "phone": "+91 98765 43210",
                    "subject": subject,
                    "message": message,
                }))
                .await
                .assert_status_ok();

            let sent = transport.sent();
            let last = sent.last().unwrap();
            assert_eq!(last.subject, format!("New Contact Form Submission: {}", subject));
        }

        assert_eq!(transport.sent().len(), 5);
    }

    #[tokio::test]
    async fn test_health_is_ok_even_when_provider_is_down() {
        let server = test_server(Arc::new(MockTransport::unreachable()), false);

        let response = server.get("/api/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({"status": "OK", "message": "Server is running"}));
    }

    #[tokio::test]
    async fn test_unmatched_routes_return_404() {
        let server = test_server(Arc::new(MockTransport::succeeding()), false);
        let expected = json!({"success": false, "error": MSG_ROUTE_NOT_FOUND});

        let response = server.get("/api/unknown").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&expected);

        let response = server.post("/nowhere").json(&valid_body()).await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&expected);

        // Known path, unsupported method
        let response = server.get("/api/contact").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&expected);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = test_server(Arc::new(MockTransport::succeeding()), false);

        let response = server.get("/api/health").await;

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_contact_oversized_body_returns_413_envelope() {
        let transport = Arc::new(MockTransport::succeeding());
        let server = test_server(transport.clone(), false);
        let mut body = valid_body();
        body["message"] = json!("x".repeat(200_000));

        let response = server.post("/api/contact").json(&body).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].is_string());
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_handler_panic_is_caught_by_router_layers() {
        async fn explode() -> &'static str {
            panic!("secret provider key")
        }

        let router = with_layers(
            Router::new().route("/explode", get(explode)),
            &test_app_config(false),
        );
        let server = TestServer::new(router).unwrap();

        let response = server.get("/explode").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"success": false, "error": "Internal server error"}));
        assert!(!response.text().contains("secret"));
    }

    #[tokio::test]
    async fn test_panic_is_reported_without_detail() {
        let response = handle_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "error": "Internal server error"})
        );
    }
}
