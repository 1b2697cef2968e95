//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds. Records read from a
//! store are validated with errors before any of these run.

use crate::models::{HotelRecord, RoomNumber, RoomState};

/// Validate a hotel record before it is written back under `key`
pub fn assert_hotel_invariants(key: &str, hotel: &HotelRecord) {
    // The record repeats its own ID
    debug_assert!(
        hotel.id == key,
        "Hotel stored under {} carries id {}",
        key,
        hotel.id
    );
}

/// The room ended up in the state a reservation transition promised
pub fn assert_room_state(hotel: &HotelRecord, room: &RoomNumber, expected: &RoomState) {
    debug_assert!(
        hotel.room_state(room) == *expected,
        "Room {} in hotel {} should be {:?}",
        room,
        hotel.id,
        expected
    );
}
