//! Venue domain entities.

pub mod model;

pub use model::{Venue, VenueFields};
