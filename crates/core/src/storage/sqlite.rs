//! SQLite-backed document store
//!
//! Every entity kind shares one `documents` table; a store only sees rows
//! of its own kind. Overwrite swaps the rows of that kind inside a single
//! transaction.

use std::marker::PhantomData;
use std::path::Path;
use std::rc::Rc;

use chrono::Utc;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::migrations;
use super::parse::parse_body;
use super::traits::{DocumentStore, Documents};
use crate::error::Result;

/// Open or create a database file and bring its schema up to date
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn open_connection<P: AsRef<Path>>(path: P) -> Result<Rc<Connection>> {
    let conn = Connection::open(path)?;
    migrations::run_migrations(&conn)?;
    Ok(Rc::new(conn))
}

/// Open in-memory database (for testing)
#[instrument]
pub fn open_in_memory_connection() -> Result<Rc<Connection>> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(Rc::new(conn))
}

pub struct SqliteDocumentStore<R> {
    conn: Rc<Connection>,
    kind: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> SqliteDocumentStore<R> {
    pub fn new(conn: Rc<Connection>, kind: &'static str) -> Self {
        Self {
            conn,
            kind,
            _record: PhantomData,
        }
    }
}

impl<R: Serialize + DeserializeOwned> DocumentStore<R> for SqliteDocumentStore<R> {
    #[instrument(skip(self), fields(kind = self.kind))]
    fn load(&self) -> Result<Documents<R>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, body FROM documents WHERE kind = ?1 ORDER BY id")?;

        let documents = stmt
            .query_map(params![self.kind], |row| {
                let id: String = row.get(0)?;
                let body = parse_body::<R>(&row.get::<_, String>(1)?)?;
                Ok((id, body))
            })?
            .collect::<std::result::Result<Documents<R>, _>>()?;

        debug!(count = documents.len(), "Loaded documents");
        Ok(documents)
    }

    #[instrument(skip(self, documents), fields(kind = self.kind, count = documents.len()))]
    fn overwrite(&self, documents: &Documents<R>) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM documents WHERE kind = ?1", params![self.kind])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO documents (kind, id, body, updated_at) VALUES (?1, ?2, ?3, ?4)",
            )?;
            let now = Utc::now().to_rfc3339();
            for (id, document) in documents {
                stmt.execute(params![self.kind, id, serde_json::to_string(document)?, now])?;
            }
        }
        tx.commit()?;

        debug!("Store rewritten");
        Ok(())
    }
}
