use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub qualification: String,
    pub subject: String,
    pub experience: String,
    pub image_url: String,
}
