//! Application services

mod calculation;
mod rate_table;

pub use calculation::CalculationService;
pub use rate_table::RateTableService;
