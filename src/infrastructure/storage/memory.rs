//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainError, DomainResult, NewRateTable, RateTable, RateTableRepository, RepositoryProvider,
};
use crate::shared::pagination::{PaginatedResult, PaginationParams};

/// In-memory rate table store for development and testing.
///
/// The `active` slot is the equivalent of the database's single-active
/// unique index: inserts and deactivations take its lock, so at most one
/// table is active at any time.
pub struct InMemoryRateTableRepository {
    tables: DashMap<i32, RateTable>,
    active: Mutex<Option<i32>>,
    id_counter: AtomicI32,
}

impl InMemoryRateTableRepository {
    pub fn new() -> Self {
        Self {
            tables: DashMap::new(),
            active: Mutex::new(None),
            id_counter: AtomicI32::new(1),
        }
    }

    fn active_slot(&self) -> DomainResult<std::sync::MutexGuard<'_, Option<i32>>> {
        self.active
            .lock()
            .map_err(|_| DomainError::Storage("active table lock poisoned".to_string()))
    }
}

impl Default for InMemoryRateTableRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateTableRepository for InMemoryRateTableRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RateTable>> {
        Ok(self.tables.get(&id).map(|t| t.value().clone()))
    }

    async fn find_active(&self) -> DomainResult<Option<RateTable>> {
        let active = *self.active_slot()?;
        Ok(active.and_then(|id| self.tables.get(&id).map(|t| t.value().clone())))
    }

    async fn find_active_id(&self) -> DomainResult<Option<i32>> {
        Ok(*self.active_slot()?)
    }

    async fn find_page(&self, params: PaginationParams) -> DomainResult<PaginatedResult<RateTable>> {
        let mut ids: Vec<i32> = self.tables.iter().map(|t| *t.key()).collect();
        ids.sort_unstable();

        let total = ids.len() as u64;
        let items = ids
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.size as usize)
            .filter_map(|id| self.tables.get(&id).map(|t| t.value().clone()))
            .collect();

        Ok(PaginatedResult::new(items, total, params))
    }

    async fn insert_active(&self, table: NewRateTable) -> DomainResult<RateTable> {
        let mut active = self.active_slot()?;
        if let Some(existing) = *active {
            return Err(DomainError::StorageConflict(format!(
                "rate table {} is already active",
                existing
            )));
        }

        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let stored = RateTable {
            id,
            name: table.name,
            effective_at: table.effective_at,
            active: true,
            categories: table.categories,
        };
        self.tables.insert(id, stored.clone());
        *active = Some(id);

        Ok(stored)
    }

    async fn mark_inactive(&self, id: i32) -> DomainResult<bool> {
        let mut active = self.active_slot()?;
        if *active != Some(id) {
            return Ok(false);
        }

        if let Some(mut table) = self.tables.get_mut(&id) {
            table.active = false;
        }
        *active = None;
        Ok(true)
    }
}

/// [`RepositoryProvider`] backed entirely by memory
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    rate_tables: InMemoryRateTableRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn rate_tables(&self) -> &dyn RateTableRepository {
        &self.rate_tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryRanges, Range};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn new_table(name: &str) -> NewRateTable {
        NewRateTable {
            name: name.to_string(),
            effective_at: Utc::now(),
            categories: vec![CategoryRanges {
                category: Category::Commercial,
                ranges: vec![Range::new(0, None, dec!(1.00))],
            }],
        }
    }

    #[tokio::test]
    async fn second_active_insert_conflicts() {
        let repo = InMemoryRateTableRepository::new();
        let first = repo.insert_active(new_table("a")).await.unwrap();
        assert!(first.active);

        let err = repo.insert_active(new_table("b")).await.unwrap_err();
        assert!(matches!(err, DomainError::StorageConflict(_)));
        assert_eq!(repo.find_active_id().await.unwrap(), Some(first.id));
    }

    #[tokio::test]
    async fn mark_inactive_only_flips_active_table_once() {
        let repo = InMemoryRateTableRepository::new();
        let table = repo.insert_active(new_table("a")).await.unwrap();

        assert!(repo.mark_inactive(table.id).await.unwrap());
        assert!(!repo.mark_inactive(table.id).await.unwrap());
        assert!(!repo.mark_inactive(999).await.unwrap());

        let stored = repo.find_by_id(table.id).await.unwrap().unwrap();
        assert!(!stored.active);
        assert_eq!(stored.categories, table.categories);
        assert!(repo.find_active().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pages_are_ordered_by_id() {
        let repo = InMemoryRateTableRepository::new();
        for name in ["a", "b", "c"] {
            let t = repo.insert_active(new_table(name)).await.unwrap();
            repo.mark_inactive(t.id).await.unwrap();
        }

        let page = repo
            .find_page(PaginationParams { page: 2, size: 2 })
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "c");
    }
}
