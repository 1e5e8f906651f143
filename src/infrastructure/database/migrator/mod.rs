//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_rate_tables;
mod m20250101_000002_create_tariff_categories;
mod m20250101_000003_create_consumption_ranges;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_rate_tables::Migration),
            Box::new(m20250101_000002_create_tariff_categories::Migration),
            Box::new(m20250101_000003_create_consumption_ranges::Migration),
        ]
    }
}
