//! Docseed Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the docseed
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for collections and documents, and on-disk fixture directories
//! for exercising the seeder.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Inserts collections and documents with sensible defaults
//! - **fixture**: Temporary seed directories populated with fixture files
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_document_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_document_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
