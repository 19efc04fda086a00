//! Document data repository for database operations.
//!
//! Documents are JSON bodies scoped to a collection. Every query filters by collection,
//! so a document id from one collection never resolves inside another.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde_json::Value;

use crate::server::model::record::Record;

/// Maximum number of rows sent in one INSERT statement by `insert_many`.
///
/// Keeps each statement under SQLite's bound parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

/// Repository providing database operations for documents.
pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    /// Creates a new DocumentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DocumentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts records into a collection, preserving their order.
    ///
    /// All rows are written inside one transaction: either every record is inserted or,
    /// on error, none are. Statements are split into chunks of `INSERT_CHUNK_SIZE` rows.
    ///
    /// # Arguments
    /// - `collection` - Name of an existing collection
    /// - `records` - Records to insert
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of inserted documents (0 for an empty input, no query issued)
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn insert_many(&self, collection: &str, records: Vec<Record>) -> Result<u64, DbErr> {
        if records.is_empty() {
            return Ok(0);
        }

        let total = records.len() as u64;
        let mut models = records
            .into_iter()
            .map(|record| entity::document::ActiveModel {
                collection: ActiveValue::Set(collection.to_string()),
                body: ActiveValue::Set(Value::Object(record)),
                ..Default::default()
            });

        let txn = self.db.begin().await?;

        loop {
            let chunk: Vec<_> = models.by_ref().take(INSERT_CHUNK_SIZE).collect();
            if chunk.is_empty() {
                break;
            }

            entity::prelude::Document::insert_many(chunk)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(total)
    }

    /// Inserts a single document into a collection.
    ///
    /// # Arguments
    /// - `collection` - Name of an existing collection
    /// - `body` - Document body
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted document with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(
        &self,
        collection: &str,
        body: Value,
    ) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            collection: ActiveValue::Set(collection.to_string()),
            body: ActiveValue::Set(body),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all documents of a collection in insertion order.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Documents ordered by id (empty if the collection has none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self, collection: &str) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::Collection.eq(collection))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a document of a collection by id.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    /// - `id` - Document id
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The document
    /// - `Ok(None)` - No document with that id in the collection
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        collection: &str,
        id: i32,
    ) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id)
            .filter(entity::document::Column::Collection.eq(collection))
            .one(self.db)
            .await
    }

    /// Replaces the body of an existing document.
    ///
    /// # Arguments
    /// - `document` - The stored document
    /// - `body` - The new body
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated document
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_body(
        &self,
        document: entity::document::Model,
        body: Value,
    ) -> Result<entity::document::Model, DbErr> {
        let mut active = document.into_active_model();
        active.body = ActiveValue::Set(body);

        active.update(self.db).await
    }

    /// Deletes a document of a collection by id.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    /// - `id` - Document id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted documents (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, collection: &str, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Document::delete_many()
            .filter(entity::document::Column::Id.eq(id))
            .filter(entity::document::Column::Collection.eq(collection))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts the documents of a collection.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of documents
    /// - `Err(DbErr)` - Database error during count
    pub async fn count(&self, collection: &str) -> Result<u64, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::Collection.eq(collection))
            .count(self.db)
            .await
    }
}
