use models::contact_form::{ContactForm, ContactFormCreate};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::{find_resources, insert_resource, SharedStore};

/// Contact-form submissions. Append-only: there is no update or delete.
#[derive(Clone)]
pub struct ContactService {
    store: SharedStore,
}

impl ContactService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    #[instrument(skip_all)]
    pub async fn submit(&self, input: ContactFormCreate) -> Result<ContactForm, ServiceError> {
        let form = ContactForm::from(input);
        insert_resource(self.store.as_ref(), &form).await?;
        info!(id = %form.id, student_class = %form.student_class, "contact form submitted");
        Ok(form)
    }

    pub async fn list(&self) -> Result<Vec<ContactForm>, ServiceError> {
        Ok(find_resources(self.store.as_ref()).await?)
    }
}
