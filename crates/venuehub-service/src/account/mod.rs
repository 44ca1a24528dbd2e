//! Signup, login, and elevated-account bootstrap.

pub mod service;

pub use service::{AccountService, LoginOutcome, SignupInput};
