//! Rate table entity

use sea_orm::entity::prelude::*;

/// A versioned rate table. At most one row has `active = true`, enforced by
/// the `idx_rate_tables_single_active` partial unique index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rate_tables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// Set by the service at creation time
    pub effective_at: DateTimeUtc,

    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tariff_category::Entity")]
    TariffCategory,
}

impl Related<super::tariff_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TariffCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
