//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a collection and inserts the provided bodies into it in order.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Collection name
/// - `bodies` - Document bodies to insert
///
/// # Returns
/// - `Ok((collection, documents))` - Created collection and its documents
/// - `Err(DbErr)` - Database error during creation
pub async fn create_collection_with_documents(
    db: &DatabaseConnection,
    name: &str,
    bodies: Vec<Value>,
) -> Result<(entity::collection::Model, Vec<entity::document::Model>), DbErr> {
    let collection = crate::factory::collection::create_collection(db, name).await?;

    let mut documents = Vec::with_capacity(bodies.len());
    for body in bodies {
        documents.push(crate::factory::document::create_document(db, name, body).await?);
    }

    Ok((collection, documents))
}
