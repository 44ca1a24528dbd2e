//! Role policy.

pub mod policy;

pub use policy::bypasses_ownership_check;
