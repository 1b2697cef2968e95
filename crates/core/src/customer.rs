//! Customer entity manager

use std::fmt;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::CustomerRecord;
use crate::storage::DocumentStore;

/// A customer bound to the store it is persisted in
pub struct Customer<'a> {
    store: &'a dyn DocumentStore<CustomerRecord>,
    id: String,
    name: Option<String>,
}

impl<'a> Customer<'a> {
    /// New customer with a generated ID and no name. Nothing is stored
    /// until [`Customer::create`].
    pub fn new(store: &'a dyn DocumentStore<CustomerRecord>) -> Self {
        Self {
            store,
            id: Uuid::new_v4().to_string(),
            name: None,
        }
    }

    /// Load a stored customer by ID
    #[instrument(skip(store))]
    pub fn find(store: &'a dyn DocumentStore<CustomerRecord>, id: &str) -> Result<Self> {
        let customers = store.load()?;
        let record = customers
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("customer {}", id)))?;

        Ok(Self::from_record(store, id.to_string(), record.name.clone()))
    }

    pub(crate) fn from_record(
        store: &'a dyn DocumentStore<CustomerRecord>,
        id: String,
        name: String,
    ) -> Self {
        Self {
            store,
            id,
            name: Some(name),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Store the customer under its ID, replacing any previous record there
    pub fn create(&mut self, name: impl Into<String>) -> Result<()> {
        self.rename(name)
    }

    #[instrument(skip(self, name), fields(customer_id = %self.id))]
    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let mut customers = self.store.load()?;
        customers.insert(self.id.clone(), CustomerRecord::new(name.clone()));
        self.store.overwrite(&customers)?;

        info!(customer_name = %name, "Customer saved");
        self.name = Some(name);
        Ok(())
    }

    #[instrument(skip(self), fields(customer_id = %self.id))]
    pub fn delete(&self) -> Result<()> {
        let mut customers = self.store.load()?;
        if customers.remove(&self.id).is_none() {
            return Err(Error::NotFound(format!("customer {}", self.id)));
        }
        self.store.overwrite(&customers)?;

        info!("Customer deleted");
        Ok(())
    }

    /// Print the customer to stdout
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Customer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer ID: {} \nCustomer Name: {} \n",
            self.id,
            self.name().unwrap_or_default()
        )
    }
}
