//! Data models for innkeep

mod customer;
mod hotel;
mod reservation;
mod room;

pub use customer::*;
pub use hotel::*;
pub use reservation::*;
pub use room::*;
