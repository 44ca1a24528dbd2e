//! Route handlers grouped by resource.

pub mod auth;
pub mod catalog;
pub mod health;
pub mod item;
pub mod venue;
