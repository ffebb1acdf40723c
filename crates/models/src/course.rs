use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subjects: Vec<String>,
    pub duration: String,
    pub target: String,
    pub highlights: Vec<String>,
}
