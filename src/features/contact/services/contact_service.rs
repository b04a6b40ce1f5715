//! Contact Service - validate, dispatch, report

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::{ContactRequestDto, ProviderReceipt};
use crate::features::contact::services::MailDispatcher;
use crate::features::contact::submission::validate_submission;

pub struct ContactService {
    dispatcher: MailDispatcher,
    expose_error_details: bool,
}

impl ContactService {
    pub fn new(dispatcher: MailDispatcher, expose_error_details: bool) -> Self {
        Self {
            dispatcher,
            expose_error_details,
        }
    }

    /// Relay one submission. Each call makes its own delivery attempt; identical
    /// submissions are not deduplicated.
    pub async fn submit(&self, dto: ContactRequestDto) -> Result<ProviderReceipt> {
        let submission = validate_submission(dto).map_err(|e| {
            tracing::debug!("Contact submission rejected: {}", e);
            AppError::from(e)
        })?;

        match self.dispatcher.dispatch(&submission).await {
            Ok(payload) => {
                tracing::info!("Email sent successfully: {}", payload);
                Ok(ProviderReceipt(payload))
            }
            Err(e) => {
                tracing::error!("Email sending error: {:?}", e);
                Err(AppError::Delivery {
                    details: self.expose_error_details.then(|| e.to_string()),
                })
            }
        }
    }
}
