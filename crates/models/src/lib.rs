//! Resource models for the coaching-site API.
//!
//! Creatable resources come in two shapes: a `*Create` struct holding only the fields a
//! client may send, and the stored struct that adds the server-generated `id` and
//! timestamp. Read-only catalog entries (faculty, courses, testimonials) have a single shape.

pub mod errors;
pub mod db;
pub mod clock;
pub mod timestamp;
pub mod document;
pub mod status_check;
pub mod contact_form;
pub mod gallery_image;
pub mod faculty;
pub mod course;
pub mod testimonial;

use serde::{de::DeserializeOwned, Serialize};

/// A persisted resource and the collection it lives in.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;
}

/// Server-generated document id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
