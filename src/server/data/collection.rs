//! Collection data repository for database operations.
//!
//! A collection exists when its registry row exists. Dropping a collection removes its
//! documents and its registry row together. Registering never fails on an existing row,
//! so concurrent registrations of the same name are safe.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

/// Repository providing database operations for the collection registry.
pub struct CollectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionRepository<'a> {
    /// Creates a new CollectionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CollectionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a collection with the given name exists.
    ///
    /// # Arguments
    /// - `name` - Collection name
    ///
    /// # Returns
    /// - `Ok(true)` - The collection exists
    /// - `Ok(false)` - No collection with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let collection = entity::prelude::Collection::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(collection.is_some())
    }

    /// Registers the collection unless it already exists.
    ///
    /// Uses a conflict-ignoring insert, so concurrent callers registering the same name
    /// all succeed. Existing documents are kept.
    ///
    /// # Arguments
    /// - `name` - Collection name
    ///
    /// # Returns
    /// - `Ok(true)` - The collection was registered by this call
    /// - `Ok(false)` - The collection already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn ensure(&self, name: &str) -> Result<bool, DbErr> {
        register(self.db, name).await
    }

    /// Brings the collection to an existing, empty state.
    ///
    /// Registers the collection if needed and deletes any documents it still holds, in a
    /// single transaction. Succeeds whether or not the collection existed before.
    ///
    /// # Arguments
    /// - `name` - Collection name
    ///
    /// # Returns
    /// - `Ok(true)` - The collection was registered by this call
    /// - `Ok(false)` - The collection already existed and was emptied
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn reset(&self, name: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let created = register(&txn, name).await?;

        entity::prelude::Document::delete_many()
            .filter(entity::document::Column::Collection.eq(name))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(created)
    }

    /// Drops a collection together with all of its documents.
    ///
    /// Runs in a single transaction so a failed drop leaves the collection untouched.
    ///
    /// # Arguments
    /// - `name` - Collection name
    ///
    /// # Returns
    /// - `Ok(true)` - The collection was dropped
    /// - `Ok(false)` - No collection with that name existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn drop(&self, name: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Document::delete_many()
            .filter(entity::document::Column::Collection.eq(name))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Collection::delete_by_id(name.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists the names of all collections in alphabetical order.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Collection names
    /// - `Err(DbErr)` - Database error during query
    pub async fn names(&self) -> Result<Vec<String>, DbErr> {
        let collections = entity::prelude::Collection::find()
            .order_by_asc(entity::collection::Column::Name)
            .all(self.db)
            .await?;

        Ok(collections.into_iter().map(|c| c.name).collect())
    }
}

async fn register<C>(conn: &C, name: &str) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let inserted = entity::prelude::Collection::insert(entity::collection::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    })
    .on_conflict(
        OnConflict::column(entity::collection::Column::Name)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(conn)
    .await?;

    Ok(inserted > 0)
}
