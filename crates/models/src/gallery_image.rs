use serde::{Deserialize, Serialize};

use crate::{clock, new_id, Resource};

pub const DEFAULT_CATEGORY: &str = "general";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImageCreate {
    pub title: String,
    pub image_url: String,
    #[serde(default = "default_category")]
    pub category: String,
}

impl GalleryImageCreate {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>, category: impl Into<String>) -> Self {
        Self { title: title.into(), image_url: image_url.into(), category: category.into() }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub created_at: String,
}

impl Resource for GalleryImage {
    const COLLECTION: &'static str = "gallery_images";
}

impl From<GalleryImageCreate> for GalleryImage {
    fn from(input: GalleryImageCreate) -> Self {
        Self {
            id: new_id(),
            title: input.title,
            image_url: input.image_url,
            category: input.category,
            created_at: clock::now_iso(),
        }
    }
}
