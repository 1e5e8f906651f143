//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::RateTableRepository;

use super::rate_table_repository::SeaOrmRateTableRepository;

/// Unified repository provider backed by SeaORM.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let table = repos.rate_tables().find_active().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    rate_tables: SeaOrmRateTableRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rate_tables: SeaOrmRateTableRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn rate_tables(&self) -> &dyn RateTableRepository {
        &self.rate_tables
    }
}
