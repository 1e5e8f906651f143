//! Tiered consumption pricing

use rust_decimal::Decimal;

use super::model::{BillingLineItem, BillingResult, Category, RateTable, Range};
use crate::shared::errors::DomainError;
use crate::shared::money::to_money;

impl RateTable {
    /// Price `consumption` units for `category` against this table.
    ///
    /// Ranges are walked in ascending `start` order. A bounded range absorbs
    /// at most `end - start` units, so the unit at a range's `end` is billed
    /// in the following range; the open-ended last range takes whatever is
    /// left.
    pub fn price(&self, category: &str, consumption: u32) -> Result<BillingResult, DomainError> {
        let category: Category = category
            .parse()
            .map_err(|_| DomainError::InvalidCategory(category.to_string()))?;

        let ranges = self
            .ranges_for(category)
            .ok_or_else(|| DomainError::CategoryNotInTable(category.to_string()))?;

        let mut sorted: Vec<&Range> = ranges.iter().collect();
        sorted.sort_by_key(|r| r.start);

        let mut remaining = consumption;
        let mut amount = Decimal::ZERO;
        let mut line_items = Vec::new();

        for range in sorted {
            if remaining == 0 {
                break;
            }

            let capacity = match range.end {
                Some(end) => end.saturating_sub(range.start),
                None => remaining,
            };
            let billed = remaining.min(capacity);

            if billed > 0 {
                let subtotal = range.unit_price * Decimal::from(billed);
                amount += subtotal;
                line_items.push(BillingLineItem {
                    range: range.clone(),
                    units: billed,
                    unit_price: range.unit_price,
                    subtotal: to_money(subtotal),
                });
            }

            remaining -= billed;
        }

        Ok(BillingResult {
            category,
            consumption,
            amount: to_money(amount),
            line_items,
        })
    }
}
