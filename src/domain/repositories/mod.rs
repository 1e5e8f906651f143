//! Repository traits for the domain layer
//!
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::rate_table::RateTableRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let table = repos.rate_tables().find_active().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn rate_tables(&self) -> &dyn RateTableRepository;
}
