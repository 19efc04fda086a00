use crate::server::{
    config::SeedSettings,
    error::seed::{DiscoveryError, FixtureError, FixtureParseError, SeedError},
    seed::{
        fixture::{collection_name, list_fixtures, FixtureFile},
        insert::insert,
        orchestrator::Seeder,
        outcome::{BatchResult, ReconcileStage, SeedOutcome, SeedWarning},
        reconcile::{reconcile, Reconciled},
        store::DocumentStore,
    },
};
use sea_orm::DbErr;
use serde_json::json;
use std::path::Path;
use test_utils::{fixture, fixture::seed_dir::SeedDir};

use scripted::{Call, ScriptedStore};


/// Seed settings for a run against an injected store.
fn settings(dir: &Path, concurrency: usize) -> SeedSettings {
    SeedSettings {
        database_url: String::new(),
        dir: dir.to_path_buf(),
        concurrency,
    }
}
