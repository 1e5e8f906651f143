//! Database entities module

pub mod consumption_range;
pub mod rate_table;
pub mod tariff_category;

pub use consumption_range::Entity as ConsumptionRange;
pub use rate_table::Entity as RateTable;
pub use tariff_category::Entity as TariffCategory;
