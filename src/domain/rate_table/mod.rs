//! Rate table aggregate
//!
//! Tables own one range partition per consumer category. This module holds
//! the entities, the partition validator, the category set check and the
//! tiered pricing walk.

pub mod calculator;
pub mod category_set;
pub mod model;
pub mod repository;
pub mod validation;

pub use category_set::resolve_categories;
pub use model::{
    BillingLineItem, BillingResult, Category, CategoryEntry, CategoryRanges, NewRateTable, Range,
    RangeDraft, RateTable,
};
pub use repository::RateTableRepository;
pub use validation::validate_ranges;
