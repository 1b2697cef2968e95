//! Hotel entity manager
//!
//! Only the hotel's name is held in memory. Reservations are read and
//! written on demand against the stored record through [`Reservation`].

use std::collections::BTreeMap;
use std::fmt;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::customer::Customer;
use crate::error::Result;
use crate::invariants::assert_hotel_invariants;
use crate::models::{HotelRecord, ReservationRecord, RoomNumber, RoomState};
use crate::reservation::{check_stored_hotel, hotel_not_found, stored_hotel, Reservation};
use crate::storage::DocumentStore;

/// A hotel bound to the store it is persisted in
pub struct Hotel<'a> {
    store: &'a dyn DocumentStore<HotelRecord>,
    id: String,
    name: Option<String>,
}

impl<'a> Hotel<'a> {
    /// New hotel with a generated ID and no name. Nothing is stored until
    /// [`Hotel::create`].
    pub fn new(store: &'a dyn DocumentStore<HotelRecord>) -> Self {
        Self {
            store,
            id: Uuid::new_v4().to_string(),
            name: None,
        }
    }

    /// Load a stored hotel by ID
    #[instrument(skip(store))]
    pub fn find(store: &'a dyn DocumentStore<HotelRecord>, id: &str) -> Result<Self> {
        let hotels = store.load()?;
        let record = stored_hotel(&hotels, id)?;
        Ok(Self::from_record(store, id.to_string(), record.name.clone()))
    }

    pub(crate) fn from_record(
        store: &'a dyn DocumentStore<HotelRecord>,
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

    pub fn create(&mut self, name: impl Into<String>) -> Result<()> {
        self.modify(name)
    }

    /// Set the name and store `{id, name}`. Reservations already stored for
    /// this hotel are kept.
    #[instrument(skip(self, name), fields(hotel_id = %self.id))]
    pub fn modify(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let mut hotels = self.store.load()?;
        let record = hotels
            .entry(self.id.clone())
            .or_insert_with(|| HotelRecord::new(self.id.clone(), name.clone()));
        check_stored_hotel(&self.id, record)?;
        record.name = name.clone();
        assert_hotel_invariants(&self.id, record);
        self.store.overwrite(&hotels)?;

        info!(hotel_name = %name, "Hotel saved");
        self.name = Some(name);
        Ok(())
    }

    #[instrument(skip(self), fields(hotel_id = %self.id))]
    pub fn delete(&self) -> Result<()> {
        let mut hotels = self.store.load()?;
        if hotels.remove(&self.id).is_none() {
            return Err(hotel_not_found());
        }
        self.store.overwrite(&hotels)?;

        info!("Hotel deleted");
        Ok(())
    }

    pub fn reserve_room(&self, room: impl Into<RoomNumber>, customer: &Customer<'_>) -> Result<()> {
        Reservation::new(self.store, room, self.id.clone(), customer.id()).create()
    }

    pub fn cancel_reservation(
        &self,
        room: impl Into<RoomNumber>,
        customer: &Customer<'_>,
    ) -> Result<()> {
        Reservation::new(self.store, room, self.id.clone(), customer.id()).cancel()
    }

    /// Stored state of one room
    pub fn room_state(&self, room: impl Into<RoomNumber>) -> Result<RoomState> {
        let hotels = self.store.load()?;
        Ok(stored_hotel(&hotels, &self.id)?.room_state(&room.into()))
    }

    /// Stored reservations, empty when none were ever made
    pub fn reservations(&self) -> Result<BTreeMap<RoomNumber, ReservationRecord>> {
        let hotels = self.store.load()?;
        Ok(stored_hotel(&hotels, &self.id)?
            .reservations
            .clone()
            .unwrap_or_default())
    }

    /// Print the hotel to stdout
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Hotel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotel ID: {} \nHotel Name: {} \n",
            self.id,
            self.name().unwrap_or_default()
        )
    }
}
