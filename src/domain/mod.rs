pub mod rate_table;
pub mod repositories;

pub use rate_table::{
    BillingLineItem, BillingResult, Category, CategoryEntry, CategoryRanges, NewRateTable, Range,
    RangeDraft, RateTable, RateTableRepository,
};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::{DomainError, ValidationError};
