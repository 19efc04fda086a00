//! Document factory for creating test documents.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test documents with customizable fields.
///
/// The target collection must already exist; use `factory::create_collection` first.
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    collection: String,
    body: Value,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new DocumentFactory with default values.
    ///
    /// Defaults:
    /// - body: `{ "property": "Property {id}" }`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `collection` - Name of the collection the document belongs to
    ///
    /// # Returns
    /// - `DocumentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, collection: impl Into<String>) -> Self {
        Self {
            db,
            collection: collection.into(),
            body: json!({ "property": format!("Property {}", next_id()) }),
        }
    }

    /// Sets the JSON body of the document.
    ///
    /// # Arguments
    /// - `body` - Document body, normally a JSON object
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Builds and inserts the document entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::document::Model)` - Created document entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            collection: ActiveValue::Set(self.collection),
            body: ActiveValue::Set(self.body),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document with the provided body in a collection.
///
/// # Arguments
/// - `db` - Database connection
/// - `collection` - Name of an existing collection
/// - `body` - Document body
///
/// # Returns
/// - `Ok(entity::document::Model)` - Created document entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_document(
    db: &DatabaseConnection,
    collection: &str,
    body: Value,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, collection).body(body).build().await
}
