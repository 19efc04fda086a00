//! Collection factory for creating test collection registry entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test collections with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let collection = CollectionFactory::new(&db)
///     .name("widgets")
///     .build()
///     .await?;
/// ```
pub struct CollectionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CollectionFactory<'a> {
    /// Creates a new CollectionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"collection_{id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CollectionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("collection_{}", next_id()),
        }
    }

    /// Sets the name of the collection.
    ///
    /// # Arguments
    /// - `name` - Collection name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the collection entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::collection::Model)` - Created collection entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::collection::Model, DbErr> {
        entity::collection::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a collection with the provided name.
///
/// Shorthand for `CollectionFactory::new(db).name(name).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Collection name
///
/// # Returns
/// - `Ok(entity::collection::Model)` - Created collection entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_collection(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::collection::Model, DbErr> {
    CollectionFactory::new(db).name(name).build().await
}
