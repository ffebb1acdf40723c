use serde::{Deserialize, Serialize};

use crate::{clock, new_id, Resource};

/// Fields a visitor submits through the website's contact form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFormCreate {
    pub name: String,
    pub phone: String,
    pub student_class: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub student_class: String,
    pub message: String,
    pub created_at: String,
}

impl Resource for ContactForm {
    const COLLECTION: &'static str = "contact_forms";
}

impl From<ContactFormCreate> for ContactForm {
    fn from(input: ContactFormCreate) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            phone: input.phone,
            student_class: input.student_class,
            message: input.message,
            created_at: clock::now_iso(),
        }
    }
}
