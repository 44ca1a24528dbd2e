//! Core type definitions used across the VenueHub workspace.

pub mod id;

pub use id::*;
