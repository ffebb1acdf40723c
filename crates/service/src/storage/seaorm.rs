use async_trait::async_trait;
use chrono::Utc;
use migration::MigratorTrait;
use models::{
    document::{self, Document},
    errors::ModelError,
};
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{debug, info};

use super::{DocumentStore, StoreError, FIND_LIMIT};

/// PostgreSQL-backed document store. All collections share the `document` table.
#[derive(Clone)]
pub struct SeaOrmDocumentStore {
    db: DatabaseConnection,
}

impl SeaOrmDocumentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Open the pool described by `cfg` and bring the schema up to date.
    pub async fn connect(cfg: &configs::DatabaseConfig) -> anyhow::Result<Self> {
        let db = models::db::connect_with_config(cfg).await?;
        migration::Migrator::up(&db, None).await?;
        info!("document schema migrated");
        Ok(Self::new(db))
    }

    fn active_model(collection: &str, doc: Document) -> document::ActiveModel {
        document::ActiveModel {
            id: NotSet,
            collection: Set(collection.to_string()),
            body: Set(serde_json::Value::Object(doc)),
            inserted_at: Set(Utc::now().into()),
        }
    }
}

#[async_trait]
impl DocumentStore for SeaOrmDocumentStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        document::Entity::insert(Self::active_model(collection, doc))
            .exec(&self.db)
            .await
            .map_err(StoreError::unavailable)?;
        Ok(())
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError> {
        if docs.is_empty() {
            return Ok(());
        }
        let rows: Vec<_> = docs.into_iter().map(|d| Self::active_model(collection, d)).collect();
        debug!(collection, rows = rows.len(), "insert_many");
        document::Entity::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(StoreError::unavailable)?;
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = document::Entity::find()
            .filter(document::Column::Collection.eq(collection))
            .order_by_asc(document::Column::Id)
            .limit(FIND_LIMIT)
            .all(&self.db)
            .await
            .map_err(StoreError::unavailable)?;
        rows.into_iter()
            .map(|row| match row.body {
                serde_json::Value::Object(map) => Ok(map),
                other => Err(StoreError::Codec(ModelError::Codec(format!(
                    "row {} in {collection} is not an object: {other}",
                    row.id
                )))),
            })
            .collect()
    }

    async fn delete_by_field(&self, collection: &str, field: &str, value: &str) -> Result<u64, StoreError> {
        let res = document::Entity::delete_many()
            .filter(document::Column::Collection.eq(collection))
            .filter(Expr::cust_with_values("body ->> ? = ?", [field, value]))
            .exec(&self.db)
            .await
            .map_err(StoreError::unavailable)?;
        Ok(res.rows_affected)
    }

    async fn count_all(&self, collection: &str) -> Result<u64, StoreError> {
        document::Entity::find()
            .filter(document::Column::Collection.eq(collection))
            .count(&self.db)
            .await
            .map_err(StoreError::unavailable)
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.db.clone().close().await.map_err(StoreError::unavailable)
    }
}
