//! Create consumption_ranges table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_tariff_categories::TariffCategories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConsumptionRanges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConsumptionRanges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConsumptionRanges::TariffCategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsumptionRanges::RangeStart)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ConsumptionRanges::RangeEnd).big_integer())
                    .col(
                        ColumnDef::new(ConsumptionRanges::UnitPriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_consumption_ranges_category")
                            .from(ConsumptionRanges::Table, ConsumptionRanges::TariffCategoryId)
                            .to(TariffCategories::Table, TariffCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_consumption_ranges_category")
                    .table(ConsumptionRanges::Table)
                    .col(ConsumptionRanges::TariffCategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConsumptionRanges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ConsumptionRanges {
    Table,
    Id,
    TariffCategoryId,
    RangeStart,
    RangeEnd,
    UnitPriceCents,
}
