//! Store capability required by the seeder and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{collection::CollectionRepository, document::DocumentRepository},
    model::record::Record,
    startup,
};

/// Operations the seeder needs from a document store.
///
/// Implementations must tolerate concurrent calls from several fixtures through a
/// shared reference.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Returns whether the named collection exists.
    async fn collection_exists(&self, name: &str) -> Result<bool, DbErr>;

    /// Drops the named collection and its documents.
    async fn drop_collection(&self, name: &str) -> Result<(), DbErr>;

    /// Creates the named collection, empty.
    ///
    /// Must succeed when the collection is still present (an existence check or drop
    /// failed earlier) and leave it without documents.
    async fn create_collection(&self, name: &str) -> Result<(), DbErr>;

    /// Inserts records into the named collection, returning how many were inserted.
    async fn insert_many(&self, name: &str, records: Vec<Record>) -> Result<u64, DbErr>;

    /// Releases the connection. Called exactly once per seeding run.
    async fn close(&self) -> Result<(), DbErr>;
}

/// Document store backed by a SeaORM database connection.
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    /// Connects to the database and applies pending migrations.
    ///
    /// # Arguments
    /// - `database_url` - SeaORM connection string
    ///
    /// # Returns
    /// - `Ok(SeaOrmStore)` - Connected store with an up-to-date schema
    /// - `Err(DbErr)` - Failed to connect or migrate
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let db = startup::connect_to_database(database_url).await?;

        Ok(Self::new(db))
    }

    /// Wraps an existing connection. Closing the store closes the connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for SeaOrmStore {
    async fn collection_exists(&self, name: &str) -> Result<bool, DbErr> {
        CollectionRepository::new(&self.db).exists(name).await
    }

    async fn drop_collection(&self, name: &str) -> Result<(), DbErr> {
        CollectionRepository::new(&self.db).drop(name).await?;
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> Result<(), DbErr> {
        CollectionRepository::new(&self.db).reset(name).await?;
        Ok(())
    }

    async fn insert_many(&self, name: &str, records: Vec<Record>) -> Result<u64, DbErr> {
        DocumentRepository::new(&self.db)
            .insert_many(name, records)
            .await
    }

    async fn close(&self) -> Result<(), DbErr> {
        self.db.close_by_ref().await
    }
}
