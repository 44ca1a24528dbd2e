//! Request session resolution.

pub mod context;
pub mod resolver;

pub use context::Session;
pub use resolver::{SessionResolver, SessionState};
