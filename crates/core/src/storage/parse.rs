//! Stored value parsing utilities
//!
//! Provides error-safe parsing of document bodies read back from SQLite
//! text columns.

use rusqlite::Error as SqlError;
use serde::de::DeserializeOwned;

/// Parse a JSON document body from a database text column
pub fn parse_body<R: DeserializeOwned>(s: &str) -> Result<R, SqlError> {
    serde_json::from_str(s).map_err(|e| {
        SqlError::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
