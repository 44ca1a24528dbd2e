//! Catalog item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use venuehub_core::types::{CatalogId, ItemId};

/// An item listed in a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Parent catalog.
    pub catalog_id: CatalogId,
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Opaque content address of the picture.
    pub picture: String,
    /// Price in minor currency units.
    pub price_uah: i64,
    /// Popularity counter, never negative.
    pub likes_count: i64,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Editable item fields. The likes counter is not among them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemFields {
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Opaque content address of the picture.
    pub picture: String,
    /// Price in minor currency units.
    pub price_uah: i64,
}

/// Direction of a popularity counter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    /// Increment by one.
    Like,
    /// Decrement by one, floored at zero.
    Unlike,
}

impl LikeAction {
    /// Signed change applied to the counter.
    pub fn delta(self) -> i64 {
        match self {
            Self::Like => 1,
            Self::Unlike => -1,
        }
    }

    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
        }
    }
}

impl fmt::Display for LikeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LikeAction {
    type Err = venuehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "unlike" => Ok(Self::Unlike),
            _ => Err(venuehub_core::AppError::validation(format!(
                "Invalid action: '{s}'. Expected one of: like, unlike"
            ))),
        }
    }
}
