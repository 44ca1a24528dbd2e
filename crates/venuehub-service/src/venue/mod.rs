//! Venue use cases.

pub mod service;

pub use service::VenueService;
