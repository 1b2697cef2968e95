//! Hotel record model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ReservationRecord, RoomNumber, RoomState};

/// A hotel as kept in the hotels store.
///
/// Unlike customers, the record repeats its own `id`. The `reservations` map
/// is absent until the first room is booked and stays (possibly empty) after
/// that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservations: Option<BTreeMap<RoomNumber, ReservationRecord>>,
}

impl HotelRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reservations: None,
        }
    }

    /// Derive the state of a room from map presence
    pub fn room_state(&self, room: &RoomNumber) -> RoomState {
        match self.reservations.as_ref().and_then(|r| r.get(room)) {
            Some(reservation) => RoomState::Reserved {
                customer_id: reservation.customer_id.clone(),
            },
            None => RoomState::Free,
        }
    }

    /// Reservation map, created empty if the hotel has none yet
    pub fn reservations_mut(&mut self) -> &mut BTreeMap<RoomNumber, ReservationRecord> {
        self.reservations.get_or_insert_with(BTreeMap::new)
    }
}
