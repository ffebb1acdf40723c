use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub student_class: String,
    pub message: String,
    pub achievement: String,
    /// Serialized as `null` when absent.
    #[serde(default)]
    pub image_url: Option<String>,
}
