//! Collection reconciliation: drop the previous collection, then create it fresh.

use crate::server::{
    error::seed::FixtureError,
    seed::{
        outcome::{ReconcileStage, SeedWarning},
        store::DocumentStore,
    },
};

/// What reconciliation did to the previous collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    pub existed: bool,
    pub dropped: bool,
}

/// Brings `collection` to an existing, empty state.
///
/// Runs strictly check exists → drop (only if it exists) → create. A failed existence
/// check counts as "does not exist" and a failed drop is skipped; both are pushed onto
/// `warnings`. Create is always attempted.
///
/// # Arguments
/// - `store` - Document store
/// - `collection` - Collection to reconcile
/// - `warnings` - Receives tolerated failures
///
/// # Returns
/// - `Ok(Reconciled)` - The collection was created
/// - `Err(FixtureError::Reconcile)` - Create failed
pub async fn reconcile<S>(
    store: &S,
    collection: &str,
    warnings: &mut Vec<SeedWarning>,
) -> Result<Reconciled, FixtureError>
where
    S: DocumentStore + ?Sized,
{
    let existed = match store.collection_exists(collection).await {
        Ok(exists) => exists,
        Err(err) => {
            warn(warnings, collection, ReconcileStage::CheckExists, err.to_string());
            false
        }
    };

    let mut dropped = false;
    if existed {
        match store.drop_collection(collection).await {
            Ok(()) => {
                tracing::debug!("Dropped {} collection", collection);
                dropped = true;
            }
            Err(err) => warn(warnings, collection, ReconcileStage::Drop, err.to_string()),
        }
    }

    store
        .create_collection(collection)
        .await
        .map_err(|source| FixtureError::Reconcile {
            collection: collection.to_string(),
            source,
        })?;

    tracing::debug!("Created {} collection", collection);

    Ok(Reconciled { existed, dropped })
}

fn warn(
    warnings: &mut Vec<SeedWarning>,
    collection: &str,
    stage: ReconcileStage,
    message: String,
) {
    let warning = SeedWarning {
        collection: collection.to_string(),
        stage,
        message,
    };

    tracing::warn!("{}", warning);
    warnings.push(warning);
}
