//! Document storage layer for innkeep

mod json_file;
mod memory;
mod migrations;
mod parse;
mod sqlite;
mod traits;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use rusqlite::Connection;
use tracing::instrument;

use crate::config::{Backend, LedgerConfig};
use crate::customer::Customer;
use crate::error::Result;
use crate::hotel::Hotel;
use crate::models::{CustomerRecord, HotelRecord};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::{open_connection, open_in_memory_connection, SqliteDocumentStore};
pub use traits::{DocumentStore, Documents};

/// Store name of the hotels kind
pub const HOTELS: &str = "hotels";
/// Store name of the customers kind
pub const CUSTOMERS: &str = "customers";

/// Handle owning the hotel and customer stores
pub struct Ledger {
    hotels: Box<dyn DocumentStore<HotelRecord>>,
    customers: Box<dyn DocumentStore<CustomerRecord>>,
}

impl Ledger {
    pub fn new(
        hotels: Box<dyn DocumentStore<HotelRecord>>,
        customers: Box<dyn DocumentStore<CustomerRecord>>,
    ) -> Self {
        Self { hotels, customers }
    }

    /// Open the backend selected by `config`
    #[instrument(skip(config), fields(backend = ?config.backend))]
    pub fn open(config: &LedgerConfig) -> Result<Self> {
        match config.backend {
            Backend::Json => Ok(Self::open_json(
                config.hotels_path()?,
                config.customers_path()?,
            )),
            Backend::Sqlite => Self::open_sqlite(config.sqlite_path()?),
            Backend::Memory => Ok(Self::open_in_memory()),
        }
    }

    /// JSON file stores at explicit paths
    pub fn open_json<P: Into<PathBuf>, Q: Into<PathBuf>>(hotels_path: P, customers_path: Q) -> Self {
        Self::new(
            Box::new(JsonFileStore::<HotelRecord>::new(hotels_path)),
            Box::new(JsonFileStore::<CustomerRecord>::new(customers_path)),
        )
    }

    /// `hotels.json` and `customers.json` inside `dir`
    pub fn open_json_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::open_json(dir.join("hotels.json"), dir.join("customers.json"))
    }

    /// Open or create a SQLite file holding both stores
    pub fn open_sqlite<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::with_connection(open_connection(path)?))
    }

    /// In-memory SQLite database (for testing)
    pub fn open_sqlite_in_memory() -> Result<Self> {
        Ok(Self::with_connection(open_in_memory_connection()?))
    }

    /// Plain in-process stores (for testing)
    pub fn open_in_memory() -> Self {
        Self::new(
            Box::new(MemoryStore::<HotelRecord>::new()),
            Box::new(MemoryStore::<CustomerRecord>::new()),
        )
    }

    fn with_connection(conn: Rc<Connection>) -> Self {
        Self::new(
            Box::new(SqliteDocumentStore::<HotelRecord>::new(conn.clone(), HOTELS)),
            Box::new(SqliteDocumentStore::<CustomerRecord>::new(conn, CUSTOMERS)),
        )
    }

    pub fn hotel_store(&self) -> &dyn DocumentStore<HotelRecord> {
        self.hotels.as_ref()
    }

    pub fn customer_store(&self) -> &dyn DocumentStore<CustomerRecord> {
        self.customers.as_ref()
    }

    /// Fresh hotel with a generated ID, not yet stored
    pub fn new_hotel(&self) -> Hotel<'_> {
        Hotel::new(self.hotel_store())
    }

    /// Stored hotel by ID
    pub fn hotel(&self, id: &str) -> Result<Hotel<'_>> {
        Hotel::find(self.hotel_store(), id)
    }

    /// Fresh customer with a generated ID, not yet stored
    pub fn new_customer(&self) -> Customer<'_> {
        Customer::new(self.customer_store())
    }

    /// Stored customer by ID
    pub fn customer(&self, id: &str) -> Result<Customer<'_>> {
        Customer::find(self.customer_store(), id)
    }

    /// Every stored hotel, ordered by ID
    pub fn list_hotels(&self) -> Result<Vec<Hotel<'_>>> {
        let hotels = self.hotels.load()?;
        Ok(hotels
            .into_iter()
            .map(|(id, record)| Hotel::from_record(self.hotel_store(), id, record.name))
            .collect())
    }

    /// Every stored customer, ordered by ID
    pub fn list_customers(&self) -> Result<Vec<Customer<'_>>> {
        let customers = self.customers.load()?;
        Ok(customers
            .into_iter()
            .map(|(id, record)| Customer::from_record(self.customer_store(), id, record.name))
            .collect())
    }
}
