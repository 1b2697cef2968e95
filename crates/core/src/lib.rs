//! innkeep core library
//!
//! Hotel, customer and reservation records kept in whole-document stores.

pub mod config;
pub mod customer;
pub mod error;
pub mod hotel;
pub mod invariants;
pub mod models;
pub mod reservation;
pub mod storage;

pub use config::{Backend, LedgerConfig};
pub use customer::Customer;
pub use error::{Error, Result};
pub use hotel::Hotel;
pub use models::*;
pub use reservation::Reservation;
pub use storage::{
    DocumentStore, Documents, JsonFileStore, Ledger, MemoryStore, SqliteDocumentStore,
};
