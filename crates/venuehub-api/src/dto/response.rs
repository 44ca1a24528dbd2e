//! Response DTOs.

use serde::{Deserialize, Serialize};

use venuehub_core::types::ItemId;

/// JSON envelope shared by every response.
///
/// Success bodies carry `error: false` with optional `message` and `data`;
/// failures carry `error: true` and a `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request failed.
    pub error: bool,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            error: false,
            message: None,
            data: Some(data),
        }
    }

    /// A successful response with both a message and data.
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// A successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A failure response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Counter state after a like or unlike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikesResponse {
    /// The item acted on.
    pub id: ItemId,
    /// Resulting likes count.
    pub likes_count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store reachability.
    pub store: String,
}
