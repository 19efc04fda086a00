use crate::server::{error::seed::FixtureError, model::record::Record, seed::store::DocumentStore};

/// Bulk inserts a fixture's records into its collection.
///
/// An empty record list is a no-op and does not touch the store.
///
/// # Returns
/// - `Ok(u64)` - Number of records inserted
/// - `Err(FixtureError::Insert)` - The store rejected the insert
pub async fn insert<S>(store: &S, collection: &str, records: Vec<Record>) -> Result<u64, FixtureError>
where
    S: DocumentStore + ?Sized,
{
    if records.is_empty() {
        return Ok(0);
    }

    let inserted = store
        .insert_many(collection, records)
        .await
        .map_err(|source| FixtureError::Insert {
            collection: collection.to_string(),
            source,
        })?;

    tracing::debug!("Inserted {} records into {}", inserted, collection);

    Ok(inserted)
}
