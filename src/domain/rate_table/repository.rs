//! Rate table repository interface

use async_trait::async_trait;

use super::model::{NewRateTable, RateTable};
use crate::domain::DomainResult;
use crate::shared::pagination::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait RateTableRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RateTable>>;

    /// The active table with every category and range loaded in one read.
    async fn find_active(&self) -> DomainResult<Option<RateTable>>;

    async fn find_active_id(&self) -> DomainResult<Option<i32>>;

    /// Tables ordered by id ascending, fully loaded.
    async fn find_page(&self, params: PaginationParams) -> DomainResult<PaginatedResult<RateTable>>;

    /// Persist a table and its ranges as the active table, atomically.
    ///
    /// Returns [`DomainError::StorageConflict`](crate::shared::errors::DomainError::StorageConflict)
    /// when another table is already active.
    async fn insert_active(&self, table: NewRateTable) -> DomainResult<RateTable>;

    /// Flip `active` to false if the table is currently active. Returns
    /// whether a row changed.
    async fn mark_inactive(&self, id: i32) -> DomainResult<bool>;
}
