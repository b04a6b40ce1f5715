//! Builds notification emails from validated submissions and hands them to a
//! [`MailTransport`] for a single delivery attempt.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use minijinja::{context, Environment};
use serde_json::Value;
use thiserror::Error;

use crate::core::config::MailConfig;
use crate::features::contact::submission::ContactSubmission;
use crate::modules::mail::{DeliveryError, MailTransport, NotificationMessage};
use crate::shared::constants::NOTIFICATION_SUBJECT_PREFIX;

/// `.html` suffix turns on minijinja's HTML auto-escaping
const TEMPLATE_NAME: &str = "contact_notification.html";
const TEMPLATE_SOURCE: &str =
    include_str!("../../../../templates/email/contact_notification.html");

/// Startup failure while building a [`MailDispatcher`]
#[derive(Debug, Error)]
pub enum DispatcherInitError {
    #[error("Invalid notification template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Sender and recipients come from configuration only, never from the submission.
pub struct MailDispatcher {
    transport: Arc<dyn MailTransport>,
    from_address: String,
    recipients: Vec<String>,
    site_name: String,
    timezone: FixedOffset,
    timezone_label: String,
    templates: Environment<'static>,
}

impl MailDispatcher {
    pub fn new(
        config: &MailConfig,
        transport: Arc<dyn MailTransport>,
    ) -> Result<Self, DispatcherInitError> {
        Self::with_template(config, transport, TEMPLATE_SOURCE)
    }

    /// Same as [`MailDispatcher::new`] with a custom notification template
    pub fn with_template(
        config: &MailConfig,
        transport: Arc<dyn MailTransport>,
        template_source: &'static str,
    ) -> Result<Self, DispatcherInitError> {
        let mut templates = Environment::new();
        templates.add_template(TEMPLATE_NAME, template_source)?;

        let timezone = FixedOffset::east_opt(config.timezone_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix());

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
            recipients: config.recipients.clone(),
            site_name: config.site_name.clone(),
            timezone,
            timezone_label: config.timezone_label.clone(),
            templates,
        })
    }

    /// Render the notification for `submission` as sent at `sent_at`
    pub fn build_message(
        &self,
        submission: &ContactSubmission,
        sent_at: DateTime<Utc>,
    ) -> Result<NotificationMessage, DeliveryError> {
        let template = self
            .templates
            .get_template(TEMPLATE_NAME)
            .map_err(|e| DeliveryError::Render(e.to_string()))?;

        let html = template
            .render(context! {
                site_name => &self.site_name,
                name => submission.name(),
                email => submission.email(),
                phone => submission.phone(),
                subject => submission.subject(),
                message => submission.message(),
                sent_at => self.format_timestamp(sent_at),
            })
            .map_err(|e| DeliveryError::Render(e.to_string()))?;

        Ok(NotificationMessage {
            from: self.from_address.clone(),
            to: self.recipients.clone(),
            subject: format!("{}{}", NOTIFICATION_SUBJECT_PREFIX, submission.subject()),
            html,
        })
    }

    /// One outbound attempt; the provider payload is returned untouched
    pub async fn dispatch(&self, submission: &ContactSubmission) -> Result<Value, DeliveryError> {
        let message = self.build_message(submission, Utc::now())?;
        self.transport.send(&message).await
    }

    /// e.g. `14 October 2026, 02:30 PM IST`
    fn format_timestamp(&self, sent_at: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            sent_at.with_timezone(&self.timezone).format("%-d %B %Y, %I:%M %p"),
            self.timezone_label
        )
    }
}
