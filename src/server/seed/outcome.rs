//! Per-fixture outcomes and the aggregated result of a seeding run.

use std::fmt;
use std::path::PathBuf;

use crate::server::error::seed::FixtureError;

/// Reconcile stage whose failure was tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileStage {
    CheckExists,
    Drop,
}

impl fmt::Display for ReconcileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckExists => write!(f, "existence check"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

/// A store failure that did not fail its fixture.
///
/// A failed existence check is treated as "collection does not exist" and a failed drop
/// is skipped; both are surfaced here so they are not silently lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedWarning {
    pub collection: String,
    pub stage: ReconcileStage,
    pub message: String,
}

impl fmt::Display for SeedWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} collection failed: {}",
            self.stage, self.collection, self.message
        )
    }
}

/// Result of seeding one fixture.
#[derive(Debug)]
pub struct SeedOutcome {
    pub collection: String,
    pub path: PathBuf,

    /// Number of records inserted, or why the fixture failed.
    pub result: Result<u64, FixtureError>,
    pub warnings: Vec<SeedWarning>,
}

impl SeedOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of every fixture of a run, in discovery order.
///
/// Only built once every fixture has settled.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub outcomes: Vec<SeedOutcome>,
}

impl BatchResult {
    pub fn new(outcomes: Vec<SeedOutcome>) -> Self {
        Self { outcomes }
    }

    /// Number of fixtures seeded successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of fixtures that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Total records inserted across all successful fixtures.
    pub fn inserted(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }

    /// Normalized failure message of every failed fixture, in discovery order.
    pub fn failure_messages(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err())
            .map(FixtureError::describe)
            .collect()
    }

    /// Every tolerated reconcile failure of the run.
    pub fn warnings(&self) -> impl Iterator<Item = &SeedWarning> {
        self.outcomes.iter().flat_map(|o| o.warnings.iter())
    }

    /// Outcome of the fixture seeding `collection`, if it was part of the run.
    pub fn outcome(&self, collection: &str) -> Option<&SeedOutcome> {
        self.outcomes.iter().find(|o| o.collection == collection)
    }

    /// Logs a summary line followed by one line per fixture.
    pub fn log(&self) {
        tracing::info!(
            "Seeding finished: {} succeeded, {} failed, {} records inserted",
            self.succeeded(),
            self.failed(),
            self.inserted()
        );

        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(count) => tracing::info!(
                    "Seeded {} collection with {} records",
                    outcome.collection,
                    count
                ),
                Err(err) => tracing::error!("{}", err.describe()),
            }
        }
    }
}
