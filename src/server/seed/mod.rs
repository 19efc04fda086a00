//! Fixture seeding workflow.
//!
//! Loads every `.json` file of a seeds directory into the collection named after the
//! file. Each fixture is processed independently:
//!
//! 1. **Parse** (`fixture`) - read the file; empty means no records, anything other than
//!    an array of objects fails the fixture
//! 2. **Reconcile** (`reconcile`) - drop the collection if it exists, then create it
//! 3. **Insert** (`insert`) - bulk insert the records
//!
//! The orchestrator (`orchestrator`) runs fixtures concurrently on a bounded worker pool,
//! waits for every fixture to settle and reports one `BatchResult` (`outcome`). Only a
//! failed connection or an unreadable seeds directory fails the run itself.
//!
//! The workflow only talks to the database through the `DocumentStore` trait (`store`),
//! implemented for SeaORM by `SeaOrmStore`.

pub mod fixture;
pub mod insert;
pub mod orchestrator;
pub mod outcome;
pub mod reconcile;
pub mod store;

#[cfg(test)]
mod test;
