//! Persistence gateway.
//!
//! [`DocumentStore`] is the only way services reach persisted data. Two backends exist:
//! PostgreSQL through sea-orm ([`seaorm::SeaOrmDocumentStore`]) and a process-local map
//! ([`memory::MemoryDocumentStore`]) selected with a `memory://` database URL.

pub mod memory;
pub mod seaorm;

use std::sync::Arc;

use async_trait::async_trait;
use models::{
    document::{from_document, to_document, Document},
    errors::ModelError,
    Resource,
};
use thiserror::Error;

/// Upper bound on documents returned by a single `find_all`.
pub const FIND_LIMIT: u64 = 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Codec(#[from] ModelError),
}

impl StoreError {
    pub fn unavailable(e: impl std::fmt::Display) -> Self {
        Self::Unavailable(e.to_string())
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError>;
    /// Inserts all documents in one write; an empty batch is a no-op.
    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError>;
    /// Documents in insertion order, capped at [`FIND_LIMIT`], without internal keys.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
    /// Removes every document whose string field `field` equals `value`; returns how many.
    async fn delete_by_field(&self, collection: &str, field: &str, value: &str) -> Result<u64, StoreError>;
    async fn count_all(&self, collection: &str) -> Result<u64, StoreError>;
    /// Release pooled connections. Called once at shutdown.
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub type SharedStore = Arc<dyn DocumentStore>;

/// Build the store named by `cfg.url`, running migrations for PostgreSQL.
pub async fn open(cfg: &configs::DatabaseConfig) -> anyhow::Result<SharedStore> {
    if cfg.is_memory() {
        tracing::warn!("using in-process document store; data is lost on restart");
        return Ok(Arc::new(memory::MemoryDocumentStore::new()));
    }
    let store = seaorm::SeaOrmDocumentStore::connect(cfg).await?;
    Ok(Arc::new(store))
}

pub async fn insert_resource<R: Resource>(store: &dyn DocumentStore, item: &R) -> Result<(), StoreError> {
    store.insert_one(R::COLLECTION, to_document(item)?).await
}

pub async fn insert_resources<R: Resource>(store: &dyn DocumentStore, items: &[R]) -> Result<(), StoreError> {
    let docs = items.iter().map(to_document).collect::<Result<Vec<_>, _>>()?;
    store.insert_many(R::COLLECTION, docs).await
}

pub async fn find_resources<R: Resource>(store: &dyn DocumentStore) -> Result<Vec<R>, StoreError> {
    store
        .find_all(R::COLLECTION)
        .await?
        .into_iter()
        .map(|doc| from_document(doc).map_err(StoreError::from))
        .collect()
}
