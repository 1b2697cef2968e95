//! Storage traits
//!
//! A document store holds every record of one entity kind, keyed by entity
//! ID. Callers always load the whole mapping and write the whole mapping
//! back, so backends (JSON file, SQLite, memory) stay interchangeable.

use std::collections::BTreeMap;

use crate::error::Result;

/// All records of one kind, keyed by entity ID
pub type Documents<R> = BTreeMap<String, R>;

/// Whole-store persistence for one entity kind
pub trait DocumentStore<R> {
    /// Load every stored record
    fn load(&self) -> Result<Documents<R>>;

    /// Replace the stored contents with `documents`
    fn overwrite(&self, documents: &Documents<R>) -> Result<()>;
}
