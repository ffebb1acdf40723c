use models::gallery_image::{GalleryImage, GalleryImageCreate};
use models::Resource;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::storage::{find_resources, insert_resource, insert_resources, SharedStore};

/// Images seeded by [`GalleryService::initialize`]: `(title, image_url, category)`.
pub const DEFAULT_IMAGES: [(&str, &str, &str); 6] = [
    (
        "Students in Classroom",
        "https://images.unsplash.com/flagged/photo-1574098335395-18cf525e45d6?w=600&h=400&fit=crop",
        "classroom",
    ),
    (
        "Science Lab Session",
        "https://images.unsplash.com/photo-1594923544727-8794d5914331?w=600&h=400&fit=crop",
        "lab",
    ),
    (
        "Group Study",
        "https://images.unsplash.com/photo-1597743622436-c6b5661731e0?w=600&h=400&fit=crop",
        "study",
    ),
    (
        "Mathematics Class",
        "https://images.unsplash.com/photo-1722573783625-eceb04251036?w=600&h=400&fit=crop",
        "classroom",
    ),
    (
        "Student Achievement",
        "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=600&h=400&fit=crop",
        "achievement",
    ),
    (
        "Library Study",
        "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=600&h=400&fit=crop",
        "study",
    ),
];

/// Result of a seeding attempt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryInit {
    pub message: String,
    pub count: u64,
}

#[derive(Clone)]
pub struct GalleryService {
    store: SharedStore,
}

impl GalleryService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<GalleryImage>, ServiceError> {
        Ok(find_resources(self.store.as_ref()).await?)
    }

    #[instrument(skip_all, fields(title = %input.title, category = %input.category))]
    pub async fn create(&self, input: GalleryImageCreate) -> Result<GalleryImage, ServiceError> {
        let image = GalleryImage::from(input);
        insert_resource(self.store.as_ref(), &image).await?;
        info!(id = %image.id, "gallery image created");
        Ok(image)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let removed = self.store.delete_by_field(GalleryImage::COLLECTION, "id", id).await?;
        if removed == 0 {
            return Err(ServiceError::not_found("Image"));
        }
        info!(removed, "gallery image deleted");
        Ok(())
    }

    /// Seed [`DEFAULT_IMAGES`] into an empty gallery.
    ///
    /// Any existing document makes this a no-op. Check and insert are two separate store
    /// calls, so concurrent callers can both observe an empty gallery and both seed.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<GalleryInit, ServiceError> {
        let existing = self.store.count_all(GalleryImage::COLLECTION).await?;
        if existing > 0 {
            warn!(existing, "gallery already initialized");
            return Ok(GalleryInit { message: "Gallery already initialized".into(), count: existing });
        }

        let images: Vec<GalleryImage> = DEFAULT_IMAGES
            .iter()
            .map(|(title, url, category)| GalleryImage::from(GalleryImageCreate::new(*title, *url, *category)))
            .collect();
        insert_resources(self.store.as_ref(), &images).await?;
        info!(count = images.len(), "gallery initialized");
        Ok(GalleryInit { message: "Gallery initialized".into(), count: images.len() as u64 })
    }
}
