//! Outbound email delivery
//!
//! Defines the provider-agnostic [`MailTransport`] seam and the wire shape of a
//! notification. [`ResendClient`] is the production transport.

mod resend_client;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use resend_client::ResendClient;

/// A fully rendered email, serialized as the provider request body
/// (`{from, to, subject, html}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Reasons a single delivery attempt failed
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Provider answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Request could not complete (connect, TLS, timeout, body read)
    #[error("{0}")]
    Transport(String),

    /// Provider answered 2xx with a body that is not JSON
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Notification body could not be rendered
    #[error("Failed to render notification: {0}")]
    Render(String),
}

/// Performs exactly one delivery attempt per call. Implementations must not retry.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send `message` and return the provider's acknowledgement payload
    async fn send(
        &self,
        message: &NotificationMessage,
    ) -> Result<serde_json::Value, DeliveryError>;
}
