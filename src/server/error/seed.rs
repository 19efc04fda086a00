//! Error taxonomy for the seeding workflow.
//!
//! Errors split into two tiers. `SeedError` is fatal to a run and is returned from the
//! orchestrator before any fixture is processed. `FixtureError` is scoped to a single
//! fixture; it is captured into that fixture's outcome and never stops sibling fixtures.

use sea_orm::DbErr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal seeding error that aborts the whole run.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The store connection could not be established; nothing was seeded.
    #[error("Failed to connect to the document store: {0}")]
    Connection(#[source] DbErr),

    /// The fixture directory could not be enumerated; nothing was seeded.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Failure to build the list of fixtures for a run.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The seeds directory is missing or cannot be read.
    #[error("Error reading seeds folder {}: {source}", path.display())]
    ReadDir {
        /// Directory that was being enumerated
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Two fixture files resolve to the same collection name.
    #[error(
        "Fixtures {} and {} both seed collection {collection}",
        first.display(),
        second.display()
    )]
    DuplicateCollection {
        /// The shared collection name
        collection: String,
        /// Fixture discovered first
        first: PathBuf,
        /// Fixture discovered second
        second: PathBuf,
    },
}

/// A fixture whose contents cannot be turned into records.
#[derive(Error, Debug)]
pub enum FixtureParseError {
    /// The fixture file could not be stat'ed or read.
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture file is not valid JSON.
    #[error("{source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("Seed file {collection} does not start with an Array")]
    NotASequence { collection: String, path: PathBuf },

    /// An element of the top-level array is not a JSON object.
    #[error("Seed file {collection} contains a non-object record at index {index}")]
    NotARecord {
        collection: String,
        path: PathBuf,
        index: usize,
    },
}

impl FixtureParseError {
    /// Path of the fixture file that failed to parse.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Json { path, .. }
            | Self::NotASequence { path, .. }
            | Self::NotARecord { path, .. } => path,
        }
    }
}

/// Failure of a single fixture, recorded in its `SeedOutcome`.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The fixture's content is unreadable or has the wrong shape.
    #[error(transparent)]
    Parse(#[from] FixtureParseError),

    /// The target collection could not be created.
    #[error("An error occurred while creating {collection} collection: {source}")]
    Reconcile {
        collection: String,
        #[source]
        source: DbErr,
    },

    /// The bulk insert into the target collection failed.
    #[error("An error occurred while inserting contents into {collection}: {source}")]
    Insert {
        collection: String,
        #[source]
        source: DbErr,
    },

    /// The fixture's task ended without producing an outcome (panicked).
    #[error("Seeding task for {collection} did not complete: {reason}")]
    Aborted { collection: String, reason: String },
}

impl FixtureError {
    /// Formats the error into the message reported for its fixture.
    ///
    /// The message starts with `Error: `, followed by the description of the operating
    /// system error code when the failure came from the filesystem with one, otherwise by
    /// the error's own message. Errors tied to a fixture file end with ` [<path>]`.
    ///
    /// # Returns
    /// - `String` - e.g. `Error: entity not found [seeds/widgets.json]`
    pub fn describe(&self) -> String {
        let mut message = String::from("Error: ");

        match self.io_source() {
            Some(source) if source.raw_os_error().is_some() => {
                message.push_str(&source.kind().to_string())
            }
            _ => message.push_str(&self.to_string()),
        }

        if let Some(path) = self.path() {
            message.push_str(&format!(" [{}]", path.display()));
        }

        message
    }

    /// Path of the fixture file, for errors that originate from reading it.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Parse(err) => Some(err.path()),
            _ => None,
        }
    }

    fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            Self::Parse(FixtureParseError::Read { source, .. }) => Some(source),
            _ => None,
        }
    }
}
