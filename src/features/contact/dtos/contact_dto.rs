use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::EMAIL_REGEX;

/// Inbound contact form payload.
///
/// Every field is optional at the wire level so that absent and empty values
/// both surface as a missing-field rejection rather than a JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequestDto {
    #[validate(required, length(min = 1))]
    #[schema(example = "Asha Verma")]
    pub name: Option<String>,

    #[validate(required, length(min = 1), regex(path = *EMAIL_REGEX))]
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "+91 98765 43210")]
    pub phone: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "Project enquiry")]
    pub subject: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "We would like to discuss a new AI project.")]
    pub message: Option<String>,
}

/// Acknowledgement returned by the email provider, passed through verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ProviderReceipt(pub serde_json::Value);
