//! Stored JSON documents.
//!
//! The sea-orm entity backs every collection with one table. API-facing code only ever
//! sees [`Document`] bodies; the numeric `id` column stays internal.

use sea_orm::entity::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::ModelError;

/// A schema-flexible document as stored in a collection.
pub type Document = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub collection: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub body: Json,
    pub inserted_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Encode a typed value as a document. Only values that serialize to a JSON object qualify.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, ModelError> {
    match serde_json::to_value(value).map_err(|e| ModelError::Codec(e.to_string()))? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(ModelError::Codec(format!("expected a JSON object, got {other}"))),
    }
}

/// Decode a document into a typed value; fields the type does not declare are ignored.
pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T, ModelError> {
    serde_json::from_value(serde_json::Value::Object(doc)).map_err(|e| ModelError::Codec(e.to_string()))
}

/// Field lookup on a document, matching only string values.
pub fn field_equals(doc: &Document, field: &str, value: &str) -> bool {
    doc.get(field).and_then(|v| v.as_str()) == Some(value)
}
