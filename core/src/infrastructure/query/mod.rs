//! Compilation of list queries into sea-orm statements.
//!
//! Query-string field names are resolved through a per-entity [`FieldMap`]
//! whitelist; raw values are coerced to the column type before they reach
//! the database.

pub mod collection;
pub mod condition;
pub mod field_map;
pub mod populate;
