//! Rate table lifecycle: create, deactivate, list

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::rate_table::{resolve_categories, validate_ranges};
use crate::domain::{
    CategoryEntry, CategoryRanges, DomainError, DomainResult, NewRateTable, RateTable,
    RepositoryProvider,
};
use crate::shared::pagination::{PaginatedResult, PaginationParams};

/// Keeps at most one rate table active.
///
/// The up-front active check produces the descriptive error; the storage
/// constraint catches concurrent creators that both passed it.
pub struct RateTableService {
    repos: Arc<dyn RepositoryProvider>,
}

impl RateTableService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Validate and persist a new active table.
    pub async fn create(
        &self,
        name: String,
        entries: Vec<CategoryEntry>,
    ) -> DomainResult<RateTable> {
        let tables = self.repos.rate_tables();

        if let Some(id) = tables.find_active_id().await? {
            return Err(DomainError::ActiveTableExists { id: Some(id) });
        }

        let mut categories = Vec::with_capacity(entries.len());
        for (category, drafts) in resolve_categories(entries)? {
            let ranges = validate_ranges(&drafts)?;
            categories.push(CategoryRanges { category, ranges });
        }

        let new_table = NewRateTable {
            name,
            effective_at: Utc::now(),
            categories,
        };

        match tables.insert_active(new_table).await {
            Ok(table) => {
                metrics::counter!("rate_tables_created_total").increment(1);
                info!("Rate table created: {} ({})", table.name, table.id);
                Ok(table)
            }
            Err(DomainError::StorageConflict(detail)) => {
                warn!("Rate table insert lost the active-table race: {}", detail);
                let id = match tables.find_active_id().await {
                    Ok(id) => id,
                    Err(e) => {
                        warn!("Could not look up the active rate table after a conflict: {}", e);
                        None
                    }
                };
                Err(DomainError::ActiveTableExists { id })
            }
            Err(e) => Err(e),
        }
    }

    /// Flip an active table to inactive. Nothing else about it changes.
    pub async fn deactivate(&self, id: i32) -> DomainResult<RateTable> {
        let tables = self.repos.rate_tables();

        let mut table = tables
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TableNotFound(id))?;

        if !table.active {
            return Err(DomainError::AlreadyInactive(id));
        }

        // A concurrent deactivation may have won between the read and here.
        if !tables.mark_inactive(id).await? {
            return Err(DomainError::AlreadyInactive(id));
        }

        table.active = false;
        metrics::counter!("rate_tables_deactivated_total").increment(1);
        info!("Rate table {} deactivated", id);
        Ok(table)
    }

    pub async fn get(&self, id: i32) -> DomainResult<Option<RateTable>> {
        self.repos.rate_tables().find_by_id(id).await
    }

    pub async fn list(&self, params: PaginationParams) -> DomainResult<PaginatedResult<RateTable>> {
        self.repos.rate_tables().find_page(params).await
    }
}
