//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. The seeder reads its
//! input from disk, so the main fixture here is a temporary seed directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::seed_dir::SeedDir;
//!
//! let seeds = SeedDir::new()?
//!     .file("widgets.json", r#"[{"a":1},{"a":2}]"#)?
//!     .empty_file("empty.json")?;
//!
//! let fixtures = list_fixtures(seeds.path()).await?;
//! ```

pub mod record;
pub mod seed_dir;
