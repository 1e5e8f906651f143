//! Rate table REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateRateTableRequest, CreateRateTableResponse, DeactivateRateTableResponse,
    RateTableResponse,
};
use crate::application::RateTableService;
use crate::interfaces::http::common::{
    ApiError, ApiResponse, PaginatedResponse, PaginationQuery, ValidatedJson,
};
use crate::shared::validations::validate_pagination;

#[derive(Clone)]
pub struct RateTableState {
    pub service: Arc<RateTableService>,
}

#[utoipa::path(
    post,
    path = "/api/rate-tables",
    tag = "Rate Tables",
    request_body = CreateRateTableRequest,
    responses(
        (status = 201, description = "Rate table created and activated", body = ApiResponse<CreateRateTableResponse>),
        (status = 400, description = "Request body failed validation, invalid ranges or categories, or a table is already active")
    )
)]
pub async fn create_rate_table(
    State(state): State<RateTableState>,
    ValidatedJson(req): ValidatedJson<CreateRateTableRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateRateTableResponse>>), ApiError> {
    let entries = req.categories.into_iter().map(Into::into).collect();
    let table = state.service.create(req.name, entries).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreateRateTableResponse {
            id: table.id,
            effective_timestamp: table.effective_at,
            message: "Rate table created successfully".to_string(),
        })),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/rate-tables/{id}",
    tag = "Rate Tables",
    params(("id" = i32, Path, description = "Rate table ID")),
    responses(
        (status = 200, description = "Rate table deactivated", body = ApiResponse<DeactivateRateTableResponse>),
        (status = 400, description = "Not found or already inactive")
    )
)]
pub async fn deactivate_rate_table(
    State(state): State<RateTableState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<DeactivateRateTableResponse>>, ApiError> {
    let table = state.service.deactivate(id).await?;

    Ok(Json(ApiResponse::success(DeactivateRateTableResponse {
        id: table.id,
        active: table.active,
        message: "Rate table deactivated successfully".to_string(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/rate-tables",
    tag = "Rate Tables",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of rate tables, oldest first", body = ApiResponse<PaginatedResponse<RateTableResponse>>)
    )
)]
pub async fn list_rate_tables(
    State(state): State<RateTableState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<RateTableResponse>>>, ApiError> {
    let params = validate_pagination(query.page, query.size);
    let page = state.service.list(params).await?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/api/rate-tables/{id}",
    tag = "Rate Tables",
    params(("id" = i32, Path, description = "Rate table ID")),
    responses(
        (status = 200, description = "Rate table details", body = ApiResponse<RateTableResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_rate_table(
    State(state): State<RateTableState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RateTableResponse>>, ApiError> {
    match state.service.get(id).await? {
        Some(table) => Ok(Json(ApiResponse::success(table.into()))),
        None => Err(ApiError::not_found("Rate table not found.")),
    }
}
