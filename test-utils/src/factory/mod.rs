//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let collection = factory::create_collection(&db, "widgets").await?;
//!     let document = factory::create_document(&db, &collection.name, json!({ "a": 1 })).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `collection` - Create collection registry entries
//! - `document` - Create documents inside a collection
//! - `helpers` - Unique ids and combined setups

pub mod collection;
pub mod document;
pub mod helpers;

pub use collection::create_collection;
pub use document::create_document;
pub use helpers::create_collection_with_documents;
