use std::collections::HashMap;

use async_trait::async_trait;
use models::document::{field_equals, Document};
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError, FIND_LIMIT};

/// Process-local document store.
///
/// Collections are vectors kept in insertion order behind a single `RwLock`.
/// Nothing is persisted; intended for local development and tests.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        let mut map = self.collections.write().await;
        map.entry(collection.to_string()).or_default().push(doc);
        Ok(())
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError> {
        if docs.is_empty() {
            return Ok(());
        }
        let mut map = self.collections.write().await;
        map.entry(collection.to_string()).or_default().extend(docs);
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let map = self.collections.read().await;
        Ok(map
            .get(collection)
            .map(|docs| docs.iter().take(FIND_LIMIT as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn delete_by_field(&self, collection: &str, field: &str, value: &str) -> Result<u64, StoreError> {
        let mut map = self.collections.write().await;
        let Some(docs) = map.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|doc| !field_equals(doc, field, value));
        Ok((before - docs.len()) as u64)
    }

    async fn count_all(&self, collection: &str) -> Result<u64, StoreError> {
        let map = self.collections.read().await;
        Ok(map.get(collection).map_or(0, |docs| docs.len() as u64))
    }
}
