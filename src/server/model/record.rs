//! Schemaless record type stored as a document body.

use serde_json::{Map, Value};

/// An ordered mapping of field names to JSON values.
///
/// Field order is preserved from the source (serde_json `preserve_order`), so a record
/// written from a fixture reads back with its keys in the same order.
pub type Record = Map<String, Value>;
