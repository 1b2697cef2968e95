//! Reservation payload and room state

use serde::{Deserialize, Serialize};

/// Payload stored under a room number inside a hotel record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub customer_id: String,
}

impl ReservationRecord {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
        }
    }
}

/// Booking state of a single room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomState {
    /// No reservation entry for the room
    Free,
    /// Held by exactly one customer
    Reserved { customer_id: String },
}

impl RoomState {
    pub fn is_free(&self) -> bool {
        matches!(self, RoomState::Free)
    }

    /// Customer holding the room, if any
    pub fn reserved_by(&self) -> Option<&str> {
        match self {
            RoomState::Free => None,
            RoomState::Reserved { customer_id } => Some(customer_id),
        }
    }
}
