//! Submission validation.
//!
//! The only way to obtain a [`ContactSubmission`] is [`validate_submission`], so
//! every notification is built from input that passed these checks.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::core::error::AppError;
use crate::features::contact::dtos::ContactRequestDto;
use crate::shared::constants::{MSG_INVALID_EMAIL, MSG_MISSING_FIELDS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingField,

    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmailFormat,
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::MissingField => AppError::MissingField(err.to_string()),
            SubmissionError::InvalidEmailFormat => AppError::InvalidEmailFormat(err.to_string()),
        }
    }
}

/// A contact submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Check required fields, then email syntax.
///
/// Values pass through untrimmed; an empty phone is treated as absent.
pub fn validate_submission(dto: ContactRequestDto) -> Result<ContactSubmission, SubmissionError> {
    if let Err(errors) = dto.validate() {
        return Err(classify(&errors));
    }

    match (dto.name, dto.email, dto.subject, dto.message) {
        (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactSubmission {
            name,
            email,
            phone: dto.phone.filter(|p| !p.is_empty()),
            subject,
            message,
        }),
        _ => Err(SubmissionError::MissingField),
    }
}

/// Missing or empty fields win over a malformed email
fn classify(errors: &ValidationErrors) -> SubmissionError {
    let missing = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .any(|e| e.code == "required" || e.code == "length");

    if missing {
        SubmissionError::MissingField
    } else {
        SubmissionError::InvalidEmailFormat
    }
}
