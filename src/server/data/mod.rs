//! Database repository layer for the document store.
//!
//! This module contains repository structs that handle database operations on the
//! collection registry and on documents. Repositories use SeaORM entity models internally;
//! the seeder reaches them through `SeaOrmStore` and the item API through `ItemService`.

pub mod collection;
pub mod document;

#[cfg(test)]
mod test;
