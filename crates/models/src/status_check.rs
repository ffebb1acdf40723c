use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{clock, new_id, Resource};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Resource for StatusCheck {
    const COLLECTION: &'static str = "status_checks";
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(input: StatusCheckCreate) -> Self {
        Self { id: new_id(), client_name: input.client_name, timestamp: clock::now() }
    }
}
