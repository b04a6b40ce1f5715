#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use serde_json::{json, Value};

#[cfg(test)]
use crate::core::config::{AppConfig, MailConfig, SwaggerConfig};
#[cfg(test)]
use crate::features::contact::{ContactService, MailDispatcher};
#[cfg(test)]
use crate::modules::mail::{DeliveryError, MailTransport, NotificationMessage};

#[cfg(test)]
pub fn test_mail_config() -> MailConfig {
    MailConfig {
        api_key: "re_test_key".to_string(),
        api_url: "http://localhost/emails".to_string(),
        from_address: "onboarding@resend.dev".to_string(),
        recipients: vec!["owner@example.com".to_string()],
        site_name: "TopAi24".to_string(),
        timezone_offset_minutes: 330,
        timezone_label: "IST".to_string(),
        request_timeout: None,
    }
}

#[cfg(test)]
pub fn test_app_config(expose_error_details: bool) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 3001,
        cors_allowed_origins: vec!["http://localhost:5173".to_string()],
        max_request_body_size: 100 * 1024,
        expose_error_details,
    }
}

#[cfg(test)]
#[derive(Debug, Clone)]
enum MockOutcome {
    Ack(Value),
    Reject { status: u16, message: String },
    Unreachable,
}

/// In-memory transport that records every message it is asked to send
#[cfg(test)]
#[derive(Debug)]
pub struct MockTransport {
    outcome: MockOutcome,
    sent: Mutex<Vec<NotificationMessage>>,
}

#[cfg(test)]
impl MockTransport {
    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::with_outcome(MockOutcome::Ack(json!({"id": "test-email-id"})))
    }

    pub fn rejecting(status: u16, message: &str) -> Self {
        Self::with_outcome(MockOutcome::Reject {
            status,
            message: message.to_string(),
        })
    }

    pub fn unreachable() -> Self {
        Self::with_outcome(MockOutcome::Unreachable)
    }

    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl MailTransport for MockTransport {
    async fn send(&self, message: &NotificationMessage) -> Result<Value, DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());

        match &self.outcome {
            MockOutcome::Ack(payload) => Ok(payload.clone()),
            MockOutcome::Reject { status, message } => Err(DeliveryError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            MockOutcome::Unreachable => {
                Err(DeliveryError::Transport("connection refused".to_string()))
            }
        }
    }
}

/// Full application router backed by `transport`, with Swagger disabled
#[cfg(test)]
pub fn test_server(transport: Arc<MockTransport>, expose_error_details: bool) -> TestServer {
    let dispatcher = MailDispatcher::new(&test_mail_config(), transport).unwrap();
    let service = Arc::new(ContactService::new(dispatcher, expose_error_details));
    let swagger = SwaggerConfig {
        enabled: false,
        title: "test".to_string(),
        version: "0.0.0".to_string(),
        description: "test".to_string(),
    };

    let app_config = test_app_config(expose_error_details);
    let router = crate::core::app::build_router(service, &app_config, &swagger);
    TestServer::new(router).unwrap()
}
