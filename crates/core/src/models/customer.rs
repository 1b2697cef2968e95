//! Customer record model

use serde::{Deserialize, Serialize};

/// A customer as kept in the customers store, keyed by customer ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
}

impl CustomerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_record_shape() {
        let record = CustomerRecord::new("Moises Diaz");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Moises Diaz" }));
    }
}
