use models::status_check::{StatusCheck, StatusCheckCreate};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::{find_resources, insert_resource, SharedStore};

/// Append-only client status log.
#[derive(Clone)]
pub struct StatusService {
    store: SharedStore,
}

impl StatusService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    #[instrument(skip(self, input), fields(client_name = %input.client_name))]
    pub async fn create(&self, input: StatusCheckCreate) -> Result<StatusCheck, ServiceError> {
        let check = StatusCheck::from(input);
        insert_resource(self.store.as_ref(), &check).await?;
        info!(id = %check.id, "status check recorded");
        Ok(check)
    }

    pub async fn list(&self) -> Result<Vec<StatusCheck>, ServiceError> {
        Ok(find_resources(self.store.as_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryDocumentStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn created_check_is_listed_with_parsed_timestamp() -> Result<(), anyhow::Error> {
        let svc = StatusService::new(Arc::new(MemoryDocumentStore::new()));
        let before = chrono::Utc::now();
        let created = svc.create(StatusCheckCreate { client_name: "acme".into() }).await?;
        assert_eq!(created.client_name, "acme");
        assert!(!created.id.is_empty());
        assert!((created.timestamp - before).num_seconds().abs() < 5);

        let listed = svc.list().await?;
        assert_eq!(listed, vec![created]);
        Ok(())
    }
}
