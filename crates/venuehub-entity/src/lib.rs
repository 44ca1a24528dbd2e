//! # venuehub-entity
//!
//! Domain entity models for VenueHub. Every struct in this crate
//! represents a database table row or a domain value object. Table rows
//! additionally derive `sqlx::FromRow`.

pub mod account;
pub mod catalog;
pub mod item;
pub mod ownership;
pub mod venue;
