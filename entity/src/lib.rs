//! SeaORM entities backing the document store.
//!
//! A collection is a named registry row; every document belongs to exactly one
//! collection and stores its record as a JSON body.

pub mod prelude;

pub mod collection;
pub mod document;
