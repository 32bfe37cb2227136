//! Hotel domain - hotels, rooms and the access errors guarding them.

mod errors;
mod hotel;

pub use errors::HotelAccessError;
pub use hotel::{Hotel, HotelWithRooms, Room};
