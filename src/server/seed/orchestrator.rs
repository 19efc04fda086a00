//! Seeding run orchestration.

use sea_orm::DbErr;
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::{sync::Semaphore, task::JoinSet};

use crate::server::{
    config::SeedSettings,
    error::seed::{FixtureError, SeedError},
    seed::{
        fixture::{list_fixtures, FixtureFile},
        insert::insert,
        outcome::{BatchResult, SeedOutcome, SeedWarning},
        reconcile::reconcile,
        store::{DocumentStore, SeaOrmStore},
    },
};

/// Seeds every fixture of a directory into the document store.
pub struct Seeder {
    settings: SeedSettings,
}

impl Seeder {
    pub fn new(settings: SeedSettings) -> Self {
        Self { settings }
    }

    /// Runs a seeding pass against the configured database.
    ///
    /// See `seed_with` for the run semantics.
    pub async fn seed(&self) -> Result<BatchResult, SeedError> {
        let database_url = self.settings.database_url.clone();

        self.seed_with(|| async move { SeaOrmStore::connect(&database_url).await })
            .await
    }

    /// Runs a seeding pass against the store returned by `connect`.
    ///
    /// Fixtures are seeded concurrently, at most `concurrency` at a time, and the run
    /// only returns once every fixture has settled. A fixture's failure never affects
    /// its siblings. The store is closed exactly once after a connection has been
    /// acquired, whether or not discovery or any fixture failed; a failed close is only
    /// logged.
    ///
    /// # Arguments
    /// - `connect` - Opens the store for this run
    ///
    /// # Returns
    /// - `Ok(BatchResult)` - Outcome of every fixture, in discovery order
    /// - `Err(SeedError::Connection)` - `connect` failed; nothing was seeded
    /// - `Err(SeedError::Discovery)` - Fixtures could not be listed; nothing was seeded
    pub async fn seed_with<S, C, Fut>(&self, connect: C) -> Result<BatchResult, SeedError>
    where
        S: DocumentStore,
        C: FnOnce() -> Fut,
        Fut: Future<Output = Result<S, DbErr>>,
    {
        let store = Arc::new(connect().await.map_err(SeedError::Connection)?);

        let fixtures = match list_fixtures(&self.settings.dir).await {
            Ok(fixtures) => fixtures,
            Err(err) => {
                close(store.as_ref()).await;
                return Err(err.into());
            }
        };

        tracing::info!(
            "Seeding {} fixtures from {}",
            fixtures.len(),
            self.settings.dir.display()
        );

        let outcomes = run_fixtures(Arc::clone(&store), fixtures, self.settings.concurrency).await;

        close(store.as_ref()).await;

        let result = BatchResult::new(outcomes);
        result.log();

        Ok(result)
    }
}

/// Seeds a single fixture: parse, reconcile, then insert.
///
/// Reconcile only runs once the fixture parsed, and insert only once reconcile
/// succeeded.
pub async fn seed_fixture<S>(store: &S, fixture: FixtureFile) -> SeedOutcome
where
    S: DocumentStore + ?Sized,
{
    let mut warnings = Vec::new();
    let result = run_stages(store, &fixture, &mut warnings).await;

    SeedOutcome {
        collection: fixture.collection,
        path: fixture.path,
        result,
        warnings,
    }
}

async fn run_stages<S>(
    store: &S,
    fixture: &FixtureFile,
    warnings: &mut Vec<SeedWarning>,
) -> Result<u64, FixtureError>
where
    S: DocumentStore + ?Sized,
{
    let records = fixture.load().await?;
    tracing::debug!(
        "Parsed {} records for {} collection",
        records.len(),
        fixture.collection
    );

    let reconciled = reconcile(store, &fixture.collection, warnings).await?;
    tracing::debug!(
        "Reconciled {} collection (existed: {}, dropped: {})",
        fixture.collection,
        reconciled.existed,
        reconciled.dropped
    );

    insert(store, &fixture.collection, records).await
}

/// Spawns one task per fixture and waits for all of them.
async fn run_fixtures<S>(
    store: Arc<S>,
    fixtures: Vec<FixtureFile>,
    concurrency: usize,
) -> Vec<SeedOutcome>
where
    S: DocumentStore,
{
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();
    let mut pending = HashMap::new();
    let mut slots: Vec<Option<SeedOutcome>> = Vec::with_capacity(fixtures.len());

    for (index, fixture) in fixtures.into_iter().enumerate() {
        slots.push(None);

        let collection = fixture.collection.clone();
        let path = fixture.path.clone();
        let store = Arc::clone(&store);
        let semaphore = Arc::clone(&semaphore);

        let handle = tasks.spawn(async move {
            // The semaphore is never closed, so acquiring always yields a permit.
            let _permit = semaphore.acquire_owned().await.ok();

            seed_fixture(store.as_ref(), fixture).await
        });

        pending.insert(handle.id(), (index, collection, path));
    }

    while let Some(joined) = tasks.join_next_with_id().await {
        let (id, outcome) = match joined {
            Ok((id, outcome)) => (id, Some(outcome)),
            Err(err) => (err.id(), aborted(&pending, err)),
        };

        if let Some((index, _, _)) = pending.get(&id) {
            slots[*index] = outcome;
        }
    }

    slots.into_iter().flatten().collect()
}

fn aborted(
    pending: &HashMap<tokio::task::Id, (usize, String, PathBuf)>,
    err: tokio::task::JoinError,
) -> Option<SeedOutcome> {
    let (_, collection, path) = pending.get(&err.id())?;

    tracing::error!("Seeding task for {} collection failed: {}", collection, err);

    Some(SeedOutcome {
        collection: collection.clone(),
        path: path.clone(),
        result: Err(FixtureError::Aborted {
            collection: collection.clone(),
            reason: err.to_string(),
        }),
        warnings: Vec::new(),
    })
}

async fn close<S>(store: &S)
where
    S: DocumentStore + ?Sized,
{
    match store.close().await {
        Ok(()) => tracing::debug!("Closed document store connection"),
        Err(err) => tracing::error!("Failed to close document store connection: {}", err),
    }
}
