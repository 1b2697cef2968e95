//! Reservation operator
//!
//! A reservation has no record of its own. It lives as an entry in the
//! owning hotel's `reservations` map, keyed by canonical room number, and
//! every operation reads and rewrites the hotels store.

use tracing::{info, instrument, warn};

use crate::error::{Error, Result};
use crate::invariants::{assert_hotel_invariants, assert_room_state};
use crate::models::{HotelRecord, ReservationRecord, RoomNumber, RoomState};
use crate::storage::{DocumentStore, Documents};

/// One `(hotel, room, customer)` triple, fixed at construction
pub struct Reservation<'a> {
    store: &'a dyn DocumentStore<HotelRecord>,
    room_number: RoomNumber,
    hotel_id: String,
    customer_id: String,
}

pub(crate) fn hotel_not_found() -> Error {
    Error::NotFound("Hotel not found".to_string())
}

/// A stored hotel record must repeat the key it is stored under
pub(crate) fn check_stored_hotel(key: &str, hotel: &HotelRecord) -> Result<()> {
    if hotel.id != key {
        warn!(hotel_id = key, stored_id = %hotel.id, "Hotel record id does not match its key");
        return Err(Error::Conflict(format!(
            "hotel stored under {} carries id {}",
            key, hotel.id
        )));
    }
    Ok(())
}

/// Look up a hotel inside a loaded hotels store
pub(crate) fn stored_hotel<'d>(
    hotels: &'d Documents<HotelRecord>,
    hotel_id: &str,
) -> Result<&'d HotelRecord> {
    let hotel = hotels.get(hotel_id).ok_or_else(hotel_not_found)?;
    check_stored_hotel(hotel_id, hotel)?;
    Ok(hotel)
}

fn stored_hotel_mut<'d>(
    hotels: &'d mut Documents<HotelRecord>,
    hotel_id: &str,
) -> Result<&'d mut HotelRecord> {
    let hotel = hotels.get_mut(hotel_id).ok_or_else(hotel_not_found)?;
    check_stored_hotel(hotel_id, hotel)?;
    Ok(hotel)
}

impl<'a> Reservation<'a> {
    pub fn new(
        store: &'a dyn DocumentStore<HotelRecord>,
        room_number: impl Into<RoomNumber>,
        hotel_id: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            store,
            room_number: room_number.into(),
            hotel_id: hotel_id.into(),
            customer_id: customer_id.into(),
        }
    }

    /// Current state of the room, read from the store
    pub fn state(&self) -> Result<RoomState> {
        let hotels = self.store.load()?;
        Ok(stored_hotel(&hotels, &self.hotel_id)?.room_state(&self.room_number))
    }

    /// Free -> Reserved
    #[instrument(skip(self), fields(hotel_id = %self.hotel_id, room = %self.room_number, customer_id = %self.customer_id))]
    pub fn create(&self) -> Result<()> {
        let mut hotels = self.store.load()?;
        let hotel = stored_hotel_mut(&mut hotels, &self.hotel_id)?;

        if let RoomState::Reserved { customer_id } = hotel.room_state(&self.room_number) {
            warn!(held_by = %customer_id, "Room already reserved");
            return Err(Error::Conflict("Room is already reserved".to_string()));
        }

        hotel.reservations_mut().insert(
            self.room_number.clone(),
            ReservationRecord::new(self.customer_id.clone()),
        );
        assert_hotel_invariants(&self.hotel_id, hotel);
        assert_room_state(
            hotel,
            &self.room_number,
            &RoomState::Reserved {
                customer_id: self.customer_id.clone(),
            },
        );
        self.store.overwrite(&hotels)?;

        info!("Room reserved");
        Ok(())
    }

    /// Reserved -> Free, only for the customer holding the room
    #[instrument(skip(self), fields(hotel_id = %self.hotel_id, room = %self.room_number, customer_id = %self.customer_id))]
    pub fn cancel(&self) -> Result<()> {
        let mut hotels = self.store.load()?;
        let hotel = stored_hotel_mut(&mut hotels, &self.hotel_id)?;

        match hotel.room_state(&self.room_number) {
            RoomState::Free => {
                return Err(Error::NotFound("Reservation not found".to_string()));
            }
            RoomState::Reserved { customer_id } if customer_id != self.customer_id => {
                warn!(held_by = %customer_id, "Cancellation by another customer rejected");
                return Err(Error::Conflict("Customer ID does not match".to_string()));
            }
            RoomState::Reserved { .. } => {}
        }

        hotel.reservations_mut().remove(&self.room_number);
        assert_hotel_invariants(&self.hotel_id, hotel);
        assert_room_state(hotel, &self.room_number, &RoomState::Free);
        self.store.overwrite(&hotels)?;

        info!("Reservation cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with_hotel(id: &str) -> MemoryStore<HotelRecord> {
        let mut hotels = Documents::new();
        hotels.insert(id.to_string(), HotelRecord::new(id, "Hilton"));
        MemoryStore::with_documents(hotels)
    }

    #[test]
    fn test_create_on_free_room() {
        let store = store_with_hotel("h1");
        let reservation = Reservation::new(&store, 101u32, "h1", "c1");

        assert_eq!(reservation.state().unwrap(), RoomState::Free);
        reservation.create().unwrap();
        assert_eq!(reservation.state().unwrap().reserved_by(), Some("c1"));

        let stored = store.load().unwrap();
        let reservations = stored["h1"].reservations.as_ref().unwrap();
        assert_eq!(reservations[&RoomNumber::from("101")].customer_id, "c1");
    }

    #[test]
    fn test_room_already_reserved() {
        let store = store_with_hotel("h1");
        Reservation::new(&store, "101", "h1", "c1").create().unwrap();

        let result = Reservation::new(&store, "101", "h1", "c2").create();
        assert!(matches!(result, Err(Error::Conflict(_))));

        let state = Reservation::new(&store, "101", "h1", "c2").state().unwrap();
        assert_eq!(state.reserved_by(), Some("c1"));
    }

    #[test]
    fn test_same_customer_cannot_double_book() {
        let store = store_with_hotel("h1");
        Reservation::new(&store, 101u32, "h1", "c1").create().unwrap();
        let result = Reservation::new(&store, "101", "h1", "c1").create();
        assert!(result.is_err_and(|e| e.is_conflict()));
    }

    #[test]
    fn test_non_existing_hotel() {
        let store = store_with_hotel("h1");
        let reservation = Reservation::new(&store, "101", "non-existing-hotel", "c1");

        assert!(matches!(reservation.create(), Err(Error::NotFound(_))));
        assert!(matches!(reservation.cancel(), Err(Error::NotFound(_))));
        assert!(matches!(reservation.state(), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_cancel_by_owner_frees_room() {
        let store = store_with_hotel("h1");
        let reservation = Reservation::new(&store, 231u32, "h1", "c1");
        reservation.create().unwrap();
        reservation.cancel().unwrap();

        assert!(reservation.state().unwrap().is_free());
        let stored = store.load().unwrap();
        assert_eq!(stored["h1"].reservations, Some(Default::default()));
    }

    #[test]
    fn test_cancel_twice_is_not_found() {
        let store = store_with_hotel("h1");
        let reservation = Reservation::new(&store, 231u32, "h1", "c1");
        reservation.create().unwrap();
        reservation.cancel().unwrap();

        assert!(matches!(reservation.cancel(), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_cancel_on_hotel_without_reservations() {
        let store = store_with_hotel("h1");
        let result = Reservation::new(&store, 1u32, "h1", "c1").cancel();
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(store.load().unwrap()["h1"].reservations.is_none());
    }

    #[test]
    fn test_cancel_with_wrong_customer() {
        let store = store_with_hotel("h1");
        Reservation::new(&store, "101", "h1", "c1").create().unwrap();

        let result = Reservation::new(&store, "101", "h1", "c2").cancel();
        assert!(matches!(result, Err(Error::Conflict(_))));

        let state = Reservation::new(&store, "101", "h1", "c1").state().unwrap();
        assert_eq!(state.reserved_by(), Some("c1"));
    }

    #[test]
    fn test_rooms_are_independent() {
        let store = store_with_hotel("h1");
        Reservation::new(&store, 101u32, "h1", "c1").create().unwrap();
        Reservation::new(&store, 102u32, "h1", "c2").create().unwrap();

        Reservation::new(&store, 101u32, "h1", "c1").cancel().unwrap();
        let state = Reservation::new(&store, 102u32, "h1", "c2").state().unwrap();
        assert_eq!(state.reserved_by(), Some("c2"));
    }

    #[test]
    fn test_room_numbers_normalized() {
        let store = store_with_hotel("h1");
        Reservation::new(&store, 101u32, "h1", "c1").create().unwrap();

        let result = Reservation::new(&store, "101", "h1", "c2").create();
        assert!(matches!(result, Err(Error::Conflict(_))));

        Reservation::new(&store, "101", "h1", "c1").cancel().unwrap();
        assert!(Reservation::new(&store, 101i64, "h1", "c1").state().unwrap().is_free());
    }

    #[test]
    fn test_error_messages() {
        let store = store_with_hotel("h1");
        Reservation::new(&store, 101u32, "h1", "c1").create().unwrap();

        let missing_hotel = Reservation::new(&store, 101u32, "h2", "c1").create().unwrap_err();
        assert_eq!(missing_hotel.to_string(), "Not found: Hotel not found");

        let taken = Reservation::new(&store, 101u32, "h1", "c2").create().unwrap_err();
        assert_eq!(taken.to_string(), "Conflict: Room is already reserved");

        let free = Reservation::new(&store, 102u32, "h1", "c1").cancel().unwrap_err();
        assert_eq!(free.to_string(), "Not found: Reservation not found");

        let other = Reservation::new(&store, 101u32, "h1", "c2").cancel().unwrap_err();
        assert_eq!(other.to_string(), "Conflict: Customer ID does not match");
    }

    #[test]
    fn test_stored_hotel_with_mismatched_id() {
        let mut hotels = Documents::new();
        hotels.insert("h1".to_string(), HotelRecord::new("other", "Hilton"));
        let store = MemoryStore::with_documents(hotels.clone());
        let reservation = Reservation::new(&store, 101u32, "h1", "c1");

        assert!(matches!(reservation.create(), Err(Error::Conflict(_))));
        assert!(matches!(reservation.cancel(), Err(Error::Conflict(_))));
        assert!(matches!(reservation.state(), Err(Error::Conflict(_))));
        assert_eq!(store.load().unwrap(), hotels);
    }
}
