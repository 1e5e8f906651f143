pub mod services;

pub use services::{CalculationService, RateTableService};
