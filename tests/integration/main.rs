//! End-to-end tests driving the router over the in-memory store.

mod helpers;

mod auth_test;
mod like_test;
mod ownership_test;
