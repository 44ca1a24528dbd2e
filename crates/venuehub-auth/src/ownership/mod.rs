//! Owner-chain authorization.

pub mod resolver;

pub use resolver::{AccessSource, Decision, OwnershipResolver, authorize};
