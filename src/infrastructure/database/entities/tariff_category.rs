//! Tariff category entity: one consumer category within a rate table

use sea_orm::entity::prelude::*;

use crate::domain::Category;

/// Stored category name
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum CategoryKind {
    #[sea_orm(string_value = "COMMERCIAL")]
    Commercial,
    #[sea_orm(string_value = "INDUSTRIAL")]
    Industrial,
    #[sea_orm(string_value = "RESIDENTIAL")]
    Residential,
    #[sea_orm(string_value = "PUBLIC")]
    Public,
}

impl From<Category> for CategoryKind {
    fn from(c: Category) -> Self {
        match c {
            Category::Commercial => Self::Commercial,
            Category::Industrial => Self::Industrial,
            Category::Residential => Self::Residential,
            Category::Public => Self::Public,
        }
    }
}

impl From<CategoryKind> for Category {
    fn from(c: CategoryKind) -> Self {
        match c {
            CategoryKind::Commercial => Self::Commercial,
            CategoryKind::Industrial => Self::Industrial,
            CategoryKind::Residential => Self::Residential,
            CategoryKind::Public => Self::Public,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tariff_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub rate_table_id: i32,

    pub category: CategoryKind,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rate_table::Entity",
        from = "Column::RateTableId",
        to = "super::rate_table::Column::Id",
        on_delete = "Cascade"
    )]
    RateTable,
    #[sea_orm(has_many = "super::consumption_range::Entity")]
    ConsumptionRange,
}

impl Related<super::rate_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RateTable.def()
    }
}

impl Related<super::consumption_range::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsumptionRange.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
