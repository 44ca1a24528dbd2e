//! Venue entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venuehub_core::types::{AccountId, VenueId};

/// A venue (restaurant) owned by one account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: VenueId,
    /// Owning account.
    pub owner_id: AccountId,
    /// Display title.
    pub title: String,
    /// Kind of venue, e.g. `"cafe"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Contact phone.
    pub phone: String,
    /// When the venue was created.
    pub created_at: DateTime<Utc>,
    /// When the venue was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Editable venue fields, used for both creation and full replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueFields {
    /// Display title.
    pub title: String,
    /// Kind of venue.
    pub kind: String,
    /// Free-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Contact phone.
    pub phone: String,
}

impl VenueFields {
    /// Whether an existing venue carries the same content.
    ///
    /// Text fields compare case-insensitively, the phone exactly.
    pub fn duplicates(&self, venue: &Venue) -> bool {
        self.title.to_lowercase() == venue.title.to_lowercase()
            && self.kind.to_lowercase() == venue.kind.to_lowercase()
            && self.description.to_lowercase() == venue.description.to_lowercase()
            && self.address.to_lowercase() == venue.address.to_lowercase()
            && self.phone == venue.phone
    }
}
