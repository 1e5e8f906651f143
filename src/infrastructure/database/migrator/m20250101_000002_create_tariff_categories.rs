//! Create tariff_categories table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_rate_tables::RateTables;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TariffCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TariffCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TariffCategories::RateTableId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TariffCategories::Category)
                            .string_len(20)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tariff_categories_rate_table")
                            .from(TariffCategories::Table, TariffCategories::RateTableId)
                            .to(RateTables::Table, RateTables::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tariff_categories_table_category")
                    .table(TariffCategories::Table)
                    .col(TariffCategories::RateTableId)
                    .col(TariffCategories::Category)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TariffCategories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TariffCategories {
    Table,
    Id,
    RateTableId,
    Category,
}
