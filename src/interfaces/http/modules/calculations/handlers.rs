//! Calculation REST API handler

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{CalculationRequest, CalculationResponse};
use crate::application::CalculationService;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct CalculationState {
    pub service: Arc<CalculationService>,
}

#[utoipa::path(
    post,
    path = "/api/calculations",
    tag = "Calculations",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Amount due with per-range breakdown", body = ApiResponse<CalculationResponse>),
        (status = 400, description = "Request body failed validation, unknown category, category missing from the table, or no active table")
    )
)]
pub async fn calculate(
    State(state): State<CalculationState>,
    ValidatedJson(req): ValidatedJson<CalculationRequest>,
) -> Result<Json<ApiResponse<CalculationResponse>>, ApiError> {
    // The validator bounds consumption to the u32 range.
    let consumption = u32::try_from(req.consumption)
        .map_err(|_| ApiError::new(axum::http::StatusCode::BAD_REQUEST, "consumption: out of range"))?;

    let result = state.service.calculate(&req.category, consumption).await?;
    Ok(Json(ApiResponse::success(result.into())))
}
