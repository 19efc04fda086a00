//! Domain models and operation parameter types.

pub mod item;
pub mod record;
