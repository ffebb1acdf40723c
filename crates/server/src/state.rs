use service::services::{
    contact_service::ContactService, gallery_service::GalleryService, status_service::StatusService,
};
use service::storage::SharedStore;

/// Per-process context handed to every handler. Built once at startup around the shared
/// document store; cloning only bumps reference counts.
#[derive(Clone)]
pub struct ServerState {
    pub status: StatusService,
    pub contact: ContactService,
    pub gallery: GalleryService,
}

impl ServerState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            status: StatusService::new(store.clone()),
            contact: ContactService::new(store.clone()),
            gallery: GalleryService::new(store),
        }
    }
}
