//! Common API response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::pagination::PaginatedResult;

/// Standard API response envelope.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Error description, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Query parameters for list endpoints
#[derive(Debug, Default, Deserialize, ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number, starting at 1. Default: 1
    pub page: Option<u64>,
    /// Items per page (1–100). Default: 20
    pub size: Option<u64>,
}

/// One page of items plus paging metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u64,
    pub size: u64,
    pub total_pages: u64,
}

impl<T, U: Into<T>> From<PaginatedResult<U>> for PaginatedResponse<T> {
    fn from(result: PaginatedResult<U>) -> Self {
        let result = result.map(Into::into);
        Self {
            items: result.items,
            total: result.total,
            page: result.page,
            size: result.size,
            total_pages: result.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::PaginationParams;

    #[test]
    fn error_envelope_has_null_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("No active rate table.")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "data": null, "error": "No active rate table."})
        );
    }

    #[test]
    fn success_envelope_omits_error() {
        let json = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 7}));
    }

    #[test]
    fn paginated_response_uses_camel_case() {
        let result = PaginatedResult::new(vec![1u8, 2], 5, PaginationParams { page: 1, size: 2 });
        let response: PaginatedResponse<u8> = result.into();
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
    }
}
