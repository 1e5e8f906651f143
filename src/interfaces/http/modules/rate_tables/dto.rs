//! Rate table DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CategoryEntry, CategoryRanges, Range, RangeDraft, RateTable};
use crate::shared::validations::not_blank;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRateTableRequest {
    #[validate(
        length(min = 1, max = 255, message = "name must be 1–255 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(length(min = 1, message = "at least one category is required"))]
    pub categories: Vec<CategoryRequest>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    /// COMMERCIAL, INDUSTRIAL, RESIDENTIAL or PUBLIC (case-insensitive)
    pub category: String,
    #[serde(default)]
    pub ranges: Vec<RangeRequest>,
}

/// A consumption band. `end` is omitted on the last, open-ended band.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RangeRequest {
    pub start: Option<u32>,
    pub end: Option<u32>,
    #[schema(value_type = Option<String>, example = "5.00")]
    pub unit_price: Option<Decimal>,
}

impl From<CategoryRequest> for CategoryEntry {
    fn from(c: CategoryRequest) -> Self {
        Self {
            category: c.category,
            ranges: c
                .ranges
                .into_iter()
                .map(|r| RangeDraft {
                    start: r.start,
                    end: r.end,
                    unit_price: r.unit_price,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRateTableResponse {
    pub id: i32,
    pub effective_timestamp: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeactivateRateTableResponse {
    pub id: i32,
    pub active: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RangeResponse {
    pub start: u32,
    pub end: Option<u32>,
    #[schema(value_type = String, example = "5.00")]
    pub unit_price: Decimal,
}

impl From<Range> for RangeResponse {
    fn from(r: Range) -> Self {
        Self {
            start: r.start,
            end: r.end,
            unit_price: r.unit_price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category: String,
    pub ranges: Vec<RangeResponse>,
}

impl From<CategoryRanges> for CategoryResponse {
    fn from(c: CategoryRanges) -> Self {
        Self {
            category: c.category.to_string(),
            ranges: c.ranges.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateTableResponse {
    pub id: i32,
    pub name: String,
    pub effective_timestamp: DateTime<Utc>,
    pub active: bool,
    /// Sorted by category name, ranges by start
    pub categories: Vec<CategoryResponse>,
}

impl From<RateTable> for RateTableResponse {
    fn from(t: RateTable) -> Self {
        Self {
            categories: t.sorted_categories().into_iter().map(Into::into).collect(),
            id: t.id,
            name: t.name,
            effective_timestamp: t.effective_at,
            active: t.active,
        }
    }
}
