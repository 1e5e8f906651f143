//! Consumption range entity

use sea_orm::entity::prelude::*;

/// One price band of a tariff category.
///
/// Prices are stored in cents; `range_end` is `NULL` for the open-ended
/// last band.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "consumption_ranges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub tariff_category_id: i32,

    pub range_start: i64,

    #[sea_orm(nullable)]
    pub range_end: Option<i64>,

    pub unit_price_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tariff_category::Entity",
        from = "Column::TariffCategoryId",
        to = "super::tariff_category::Column::Id",
        on_delete = "Cascade"
    )]
    TariffCategory,
}

impl Related<super::tariff_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TariffCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
