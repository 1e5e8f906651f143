//! Tariff calculation against the active rate table

use std::sync::Arc;

use tracing::info;

use crate::domain::{BillingResult, DomainError, DomainResult, RepositoryProvider};

pub struct CalculationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CalculationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Price `consumption` units for `category` using the active table.
    pub async fn calculate(&self, category: &str, consumption: u32) -> DomainResult<BillingResult> {
        let table = self
            .repos
            .rate_tables()
            .find_active()
            .await?
            .ok_or(DomainError::NoActiveTable)?;

        let result = table.price(category, consumption)?;

        metrics::counter!(
            "tariff_calculations_total",
            "category" => result.category.as_str()
        )
        .increment(1);

        info!(
            "Calculated {} for {} units ({}) on table {}",
            result.amount, consumption, result.category, table.id
        );

        Ok(result)
    }
}
