//! Custom Axum extractors.

pub mod json;
pub mod path;
pub mod query;
pub mod session;

pub use json::ValidatedJson;
pub use path::ApiPath;
pub use query::ApiQuery;
pub use session::CurrentSession;
