//! Item use cases and the likes counter.

pub mod likes;
pub mod service;

pub use likes::LikeService;
pub use service::ItemService;
