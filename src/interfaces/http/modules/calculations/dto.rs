//! Calculation DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{BillingLineItem, BillingResult};
use crate::shared::validations::not_blank;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Consumer category, case-insensitive
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    /// Consumed units (m³)
    #[validate(range(min = 0i64, max = 4_294_967_295i64, message = "consumption must be between 0 and 4294967295"))]
    pub consumption: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RangeBounds {
    pub start: u32,
    pub end: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub range: RangeBounds,
    pub units_billed: u32,
    #[schema(value_type = String, example = "5.00")]
    pub unit_price: Decimal,
    #[schema(value_type = String, example = "50.00")]
    pub subtotal: Decimal,
}

impl From<BillingLineItem> for BreakdownItem {
    fn from(item: BillingLineItem) -> Self {
        Self {
            range: RangeBounds {
                start: item.range.start,
                end: item.range.end,
            },
            units_billed: item.units,
            unit_price: item.unit_price,
            subtotal: item.subtotal,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// Canonical category name
    pub category: String,
    pub total_consumption: u32,
    #[schema(value_type = String, example = "100.00")]
    pub total_amount: Decimal,
    pub breakdown: Vec<BreakdownItem>,
}

impl From<BillingResult> for CalculationResponse {
    fn from(r: BillingResult) -> Self {
        Self {
            category: r.category.to_string(),
            total_consumption: r.consumption,
            total_amount: r.amount,
            breakdown: r.line_items.into_iter().map(Into::into).collect(),
        }
    }
}
