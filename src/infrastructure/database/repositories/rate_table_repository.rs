//! SeaORM implementation of RateTableRepository

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use tracing::debug;

use crate::domain::{
    CategoryRanges, DomainError, DomainResult, NewRateTable, Range, RateTable, RateTableRepository,
};
use crate::infrastructure::database::entities::{consumption_range, rate_table, tariff_category};
use crate::shared::money::{to_money, MONEY_SCALE};
use crate::shared::pagination::{PaginatedResult, PaginationParams};

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Like [`db_err`], but surfaces unique-index violations as conflicts.
fn write_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::StorageConflict(detail),
        _ => db_err(e),
    }
}

fn price_to_cents(price: Decimal) -> DomainResult<i64> {
    to_money(price)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| DomainError::Storage(format!("unit price out of range: {}", price)))
}

fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, MONEY_SCALE)
}

fn bound_from_db(value: i64) -> DomainResult<u32> {
    u32::try_from(value)
        .map_err(|_| DomainError::Storage(format!("stored range bound out of range: {}", value)))
}

fn range_to_domain(r: consumption_range::Model) -> DomainResult<Range> {
    Ok(Range::new(
        bound_from_db(r.range_start)?,
        r.range_end.map(bound_from_db).transpose()?,
        cents_to_price(r.unit_price_cents),
    ))
}

/// Load the categories and ranges of `tables` with two batched queries and
/// assemble the aggregates in the order given.
async fn assemble<C: ConnectionTrait>(
    db: &C,
    tables: Vec<rate_table::Model>,
) -> DomainResult<Vec<RateTable>> {
    if tables.is_empty() {
        return Ok(Vec::new());
    }

    let table_ids: Vec<i32> = tables.iter().map(|t| t.id).collect();
    let categories = tariff_category::Entity::find()
        .filter(tariff_category::Column::RateTableId.is_in(table_ids))
        .order_by_asc(tariff_category::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;

    let category_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
    let ranges = if category_ids.is_empty() {
        Vec::new()
    } else {
        consumption_range::Entity::find()
            .filter(consumption_range::Column::TariffCategoryId.is_in(category_ids))
            .order_by_asc(consumption_range::Column::RangeStart)
            .all(db)
            .await
            .map_err(db_err)?
    };

    let mut ranges_by_category: HashMap<i32, Vec<Range>> = HashMap::new();
    for r in ranges {
        let category_id = r.tariff_category_id;
        ranges_by_category
            .entry(category_id)
            .or_default()
            .push(range_to_domain(r)?);
    }

    let mut categories_by_table: HashMap<i32, Vec<CategoryRanges>> = HashMap::new();
    for c in categories {
        categories_by_table
            .entry(c.rate_table_id)
            .or_default()
            .push(CategoryRanges {
                category: c.category.into(),
                ranges: ranges_by_category.remove(&c.id).unwrap_or_default(),
            });
    }

    Ok(tables
        .into_iter()
        .map(|t| RateTable {
            categories: categories_by_table.remove(&t.id).unwrap_or_default(),
            id: t.id,
            name: t.name,
            effective_at: t.effective_at,
            active: t.active,
        })
        .collect())
}

// ── SeaOrmRateTableRepository ───────────────────────────────────

pub struct SeaOrmRateTableRepository {
    db: DatabaseConnection,
}

impl SeaOrmRateTableRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_one(&self, model: Option<rate_table::Model>) -> DomainResult<Option<RateTable>> {
        match model {
            Some(m) => Ok(assemble(&self.db, vec![m]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl RateTableRepository for SeaOrmRateTableRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RateTable>> {
        let model = rate_table::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        self.load_one(model).await
    }

    async fn find_active(&self) -> DomainResult<Option<RateTable>> {
        let model = rate_table::Entity::find()
            .filter(rate_table::Column::Active.eq(true))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        self.load_one(model).await
    }

    async fn find_active_id(&self) -> DomainResult<Option<i32>> {
        let model = rate_table::Entity::find()
            .filter(rate_table::Column::Active.eq(true))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(|m| m.id))
    }

    async fn find_page(&self, params: PaginationParams) -> DomainResult<PaginatedResult<RateTable>> {
        let paginator = rate_table::Entity::find()
            .order_by_asc(rate_table::Column::Id)
            .paginate(&self.db, params.size);

        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await
            .map_err(db_err)?;

        let items = assemble(&self.db, models).await?;
        Ok(PaginatedResult::new(items, total, params))
    }

    async fn insert_active(&self, table: NewRateTable) -> DomainResult<RateTable> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let header = rate_table::ActiveModel {
            name: Set(table.name),
            effective_at: Set(table.effective_at),
            active: Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(write_err)?;

        for entry in &table.categories {
            let category = tariff_category::ActiveModel {
                rate_table_id: Set(header.id),
                category: Set(entry.category.into()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(write_err)?;

            let ranges = entry
                .ranges
                .iter()
                .map(|r| {
                    Ok(consumption_range::ActiveModel {
                        tariff_category_id: Set(category.id),
                        range_start: Set(i64::from(r.start)),
                        range_end: Set(r.end.map(i64::from)),
                        unit_price_cents: Set(price_to_cents(r.unit_price)?),
                        ..Default::default()
                    })
                })
                .collect::<DomainResult<Vec<_>>>()?;

            if !ranges.is_empty() {
                consumption_range::Entity::insert_many(ranges)
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
            }
        }

        txn.commit().await.map_err(write_err)?;
        debug!("Rate table {} stored with {} categories", header.id, table.categories.len());

        Ok(RateTable {
            id: header.id,
            name: header.name,
            effective_at: header.effective_at,
            active: header.active,
            categories: table.categories,
        })
    }

    async fn mark_inactive(&self, id: i32) -> DomainResult<bool> {
        let result = rate_table::Entity::update_many()
            .col_expr(rate_table::Column::Active, Expr::value(false))
            .filter(rate_table::Column::Id.eq(id))
            .filter(rate_table::Column::Active.eq(true))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected == 1)
    }
}
