use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope shared by every JSON endpoint.
///
/// Absent fields are omitted from the wire, so a success carries
/// `{success, message, data}` and a failure carries `{success, error, details?}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            message,
            data,
            error: None,
            details: None,
        }
    }

    pub fn error(error: impl Into<String>, details: Option<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
            details,
        }
    }
}

/// Liveness payload returned by `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_omits_error_fields() {
        let body = ApiResponse::success(Some(json!({"id": "abc"})), Some("done".to_string()));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "message": "done", "data": {"id": "abc"}})
        );
    }

    #[test]
    fn test_error_omits_absent_details() {
        let value = serde_json::to_value(ApiResponse::<()>::error("nope", None)).unwrap();
        assert_eq!(value, json!({"success": false, "error": "nope"}));

        let value =
            serde_json::to_value(ApiResponse::<()>::error("nope", Some("why".to_string())))
                .unwrap();
        assert_eq!(
            value,
            json!({"success": false, "error": "nope", "details": "why"})
        );
    }
}
