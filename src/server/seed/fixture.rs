//! Fixture discovery and parsing.
//!
//! Discovery only looks at directory entries; file contents are read per fixture by
//! `FixtureFile::load` so a malformed file fails only its own fixture.

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::server::{
    error::seed::{DiscoveryError, FixtureParseError},
    model::record::Record,
};

/// Extension marking a directory entry as a fixture.
pub const FIXTURE_EXTENSION: &str = "json";

/// A fixture file and the collection it seeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    pub collection: String,
    pub path: PathBuf,
}

impl FixtureFile {
    /// Builds a fixture from a path if the path names a fixture file.
    ///
    /// # Returns
    /// - `Some(FixtureFile)` - The extension is `json` and a collection name can be derived
    /// - `None` - Not a fixture
    pub fn from_path(path: PathBuf) -> Option<Self> {
        if path.extension().and_then(|ext| ext.to_str()) != Some(FIXTURE_EXTENSION) {
            return None;
        }

        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            tracing::debug!("Skipping fixture with non UTF-8 file name: {}", path.display());
            return None;
        };
        let collection = collection_name(file_name)?.to_string();

        Some(Self { collection, path })
    }

    /// Reads and parses the fixture's records.
    ///
    /// A zero-byte file has no records. Otherwise the content must be a JSON array whose
    /// elements are all objects.
    ///
    /// # Returns
    /// - `Ok(Vec<Record>)` - Records in file order (empty for a zero-byte file)
    /// - `Err(FixtureParseError)` - Unreadable file, invalid JSON, or wrong shape
    pub async fn load(&self) -> Result<Vec<Record>, FixtureParseError> {
        let read_err = |source| FixtureParseError::Read {
            path: self.path.clone(),
            source,
        };

        let metadata = tokio::fs::metadata(&self.path).await.map_err(read_err)?;
        if metadata.len() == 0 {
            return Ok(Vec::new());
        }

        let contents = tokio::fs::read(&self.path).await.map_err(read_err)?;

        let value: Value =
            serde_json::from_slice(&contents).map_err(|source| FixtureParseError::Json {
                path: self.path.clone(),
                source,
            })?;

        let Value::Array(items) = value else {
            return Err(FixtureParseError::NotASequence {
                collection: self.collection.clone(),
                path: self.path.clone(),
            });
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(FixtureParseError::NotARecord {
                    collection: self.collection.clone(),
                    path: self.path.clone(),
                    index,
                }),
            })
            .collect()
    }
}

/// Derives the collection name from a fixture file name.
///
/// The name is everything before the first `.`, so `widgets.json` and
/// `widgets.v2.json` both seed `widgets`.
///
/// # Returns
/// - `Some(&str)` - Non-empty collection name
/// - `None` - The file name starts with `.`
pub fn collection_name(file_name: &str) -> Option<&str> {
    file_name.split('.').next().filter(|name| !name.is_empty())
}

/// Lists the fixtures of a directory in enumeration order.
///
/// Entries without the `json` extension, directories and hidden files are skipped. The
/// order is whatever the platform's directory enumeration yields.
///
/// # Arguments
/// - `dir` - Seeds directory
///
/// # Returns
/// - `Ok(Vec<FixtureFile>)` - Fixtures found (empty if there are none)
/// - `Err(DiscoveryError::ReadDir)` - The directory cannot be enumerated
/// - `Err(DiscoveryError::DuplicateCollection)` - Two files seed the same collection
pub async fn list_fixtures(dir: &Path) -> Result<Vec<FixtureFile>, DiscoveryError> {
    let read_dir_err = |source| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_dir_err)?;

    let mut fixtures = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
        let file_type = entry.file_type().await.map_err(read_dir_err)?;
        if file_type.is_dir() {
            continue;
        }

        let Some(fixture) = FixtureFile::from_path(entry.path()) else {
            continue;
        };

        if let Some(first) = seen.get(&fixture.collection) {
            return Err(DiscoveryError::DuplicateCollection {
                collection: fixture.collection,
                first: first.clone(),
                second: fixture.path,
            });
        }

        seen.insert(fixture.collection.clone(), fixture.path.clone());
        fixtures.push(fixture);
    }

    Ok(fixtures)
}
