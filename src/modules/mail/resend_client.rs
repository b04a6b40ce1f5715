//! Resend transactional email client
//!
//! `POST {api_url}` with a bearer credential and a JSON
//! `{from, to, subject, html}` body.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{DeliveryError, MailTransport, NotificationMessage};
use crate::core::config::MailConfig;

pub struct ResendClient {
    http_client: Client,
    api_url: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(config: &MailConfig) -> Result<Self, DeliveryError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| DeliveryError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl MailTransport for ResendClient {
    async fn send(&self, message: &NotificationMessage) -> Result<Value, DeliveryError> {
        debug!(
            "Sending notification via {} to {} recipient(s)",
            self.api_url,
            message.to.len()
        );

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                debug!("Email provider request failed: {:?}", e);
                DeliveryError::Transport(format!("Email provider request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            debug!("Failed to read email provider response: {:?}", e);
            DeliveryError::Transport(format!("Failed to read email provider response: {}", e))
        })?;
        let payload = serde_json::from_str::<Value>(&body).ok();

        if !status.is_success() {
            debug!("Email provider error: HTTP {} - {}", status, body);
            let message = payload
                .as_ref()
                .and_then(|p| p.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        payload.ok_or_else(|| {
            debug!("Email provider returned non-JSON body: {}", body);
            DeliveryError::InvalidResponse(format!("expected JSON, got {} bytes", body.len()))
        })
    }
}
