//! Temporary seed directories for seeder tests.
//!
//! A `SeedDir` owns a `tempfile::TempDir` that is removed when the fixture is dropped,
//! so each test gets an isolated directory of fixture files and, when needed, an
//! isolated SQLite database file next to them.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// Name of the SQLite database file created by `database_url()`.
const DATABASE_FILE: &str = "store.sqlite";

/// A temporary directory populated with fixture files.
pub struct SeedDir {
    dir: TempDir,
    seeds: PathBuf,
}

impl SeedDir {
    /// Creates an empty temporary seed directory.
    ///
    /// Fixture files live in a `seeds` subdirectory so the database file created by
    /// `database_url()` never shows up in a fixture listing.
    ///
    /// # Returns
    /// - `Ok(SeedDir)` - Empty seed directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let seeds = dir.path().join("seeds");
        std::fs::create_dir(&seeds)?;

        Ok(Self { dir, seeds })
    }

    /// Writes a fixture file with the provided contents.
    ///
    /// # Arguments
    /// - `name` - File name including extension (e.g. `widgets.json`)
    /// - `contents` - Raw file contents
    ///
    /// # Returns
    /// - `Ok(Self)` - Seed directory for method chaining
    /// - `Err(TestError::Io)` - Failed to write the file
    pub fn file(self, name: &str, contents: &str) -> Result<Self, TestError> {
        std::fs::write(self.seeds.join(name), contents)?;
        Ok(self)
    }

    /// Writes a zero-byte fixture file.
    pub fn empty_file(self, name: &str) -> Result<Self, TestError> {
        self.file(name, "")
    }

    /// Creates a subdirectory inside the seed directory.
    pub fn subdir(self, name: &str) -> Result<Self, TestError> {
        std::fs::create_dir(self.seeds.join(name))?;
        Ok(self)
    }

    /// Path of the directory holding the fixture files.
    pub fn path(&self) -> &Path {
        &self.seeds
    }

    /// Path of a fixture file inside the seed directory.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.seeds.join(name)
    }

    /// SQLite connection string for a database file owned by this fixture.
    ///
    /// The file is created on first connect (`mode=rwc`) and removed with the directory.
    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}?mode=rwc",
            self.dir.path().join(DATABASE_FILE).display()
        )
    }
}
