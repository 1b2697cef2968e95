//! In-memory document store (for testing)

use std::cell::RefCell;

use super::traits::{DocumentStore, Documents};
use crate::error::Result;

#[derive(Debug)]
pub struct MemoryStore<R> {
    documents: RefCell<Documents<R>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            documents: RefCell::new(Documents::new()),
        }
    }

    /// Seed the store with existing records
    pub fn with_documents(documents: Documents<R>) -> Self {
        Self {
            documents: RefCell::new(documents),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> DocumentStore<R> for MemoryStore<R> {
    fn load(&self) -> Result<Documents<R>> {
        Ok(self.documents.borrow().clone())
    }

    fn overwrite(&self, documents: &Documents<R>) -> Result<()> {
        *self.documents.borrow_mut() = documents.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRecord;

    #[test]
    fn test_load_returns_copy() {
        let store = MemoryStore::new();
        let mut documents = store.load().unwrap();
        documents.insert("c1".to_string(), CustomerRecord::new("Moises Diaz"));

        // Not persisted until overwrite
        assert!(store.load().unwrap().is_empty());

        store.overwrite(&documents).unwrap();
        assert_eq!(store.load().unwrap(), documents);
    }
}
