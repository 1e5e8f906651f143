//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod rate_table_repository;
pub mod repository_provider;

pub use rate_table_repository::SeaOrmRateTableRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
