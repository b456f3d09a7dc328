use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr, TransactionTrait,
};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{CreateItem, Item},
    repository::ItemRepository,
};

/// PostgreSQL implementation of ItemRepository, backed by SeaORM.
///
/// Name uniqueness is enforced by the unique index on LOWER(name);
/// a violation surfacing from insert or write-back is mapped to
/// [`ItemError::DuplicateName`].
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn internal(e: DbErr) -> ItemError {
    ItemError::Internal(format!("Database error: {}", e))
}

/// Map a write error, treating a unique-index violation as a name conflict.
fn write_err(e: DbErr, name: &str) -> ItemError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ItemError::DuplicateName(name.to_string()),
        _ => internal(e),
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn find_by_exact_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Name))).eq(name.to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn find_by_name_contains(&self, substring: &str) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .filter(Expr::col(entity::Column::Name).ilike(format!("%{}%", substring)))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_price_above(&self, threshold: f64) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Price.gt(threshold))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, input: CreateItem) -> ItemResult<Item> {
        let name = input.name.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &name))?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn persist(&self, item: &Item) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = item.into();

        let model = entity::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ItemError::NotFound(item.id),
                other => write_err(other, &item.name),
            })?;

        tracing::info!(item_id = item.id, "Updated item");
        Ok(model.into())
    }

    async fn persist_all(&self, items: &[Item]) -> ItemResult<u64> {
        let txn = self.db.begin().await.map_err(internal)?;

        let mut written = 0u64;
        for item in items {
            let active_model: entity::ActiveModel = item.into();

            // An early return drops the transaction, rolling back every
            // row already written in this batch.
            entity::Entity::update(active_model)
                .exec(&txn)
                .await
                .map_err(|e| match e {
                    DbErr::RecordNotUpdated => ItemError::NotFound(item.id),
                    other => write_err(other, &item.name),
                })?;
            written += 1;
        }

        txn.commit().await.map_err(internal)?;
        Ok(written)
    }

    async fn remove(&self, id: i64) -> ItemResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(internal)?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
