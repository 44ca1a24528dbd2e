//! Ownership paths through the venue → catalog → item hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;
use venuehub_core::types::{CatalogId, ItemId, VenueId};

/// The chain of parent links from a resource up to its venue.
///
/// A path only resolves when every link matches the stored parent, so
/// `Catalog { venue_id: 1, catalog_id: 7 }` names nothing if catalog 7
/// belongs to venue 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResourcePath {
    /// A venue, owned directly by an account.
    Venue {
        /// Venue id.
        venue_id: VenueId,
    },
    /// A catalog within a venue.
    Catalog {
        /// Parent venue id.
        venue_id: VenueId,
        /// Catalog id.
        catalog_id: CatalogId,
    },
    /// An item within a catalog.
    Item {
        /// Venue id at the root.
        venue_id: VenueId,
        /// Parent catalog id.
        catalog_id: CatalogId,
        /// Item id.
        item_id: ItemId,
    },
}

impl ResourcePath {
    /// Path to a venue.
    pub fn venue(venue_id: VenueId) -> Self {
        Self::Venue { venue_id }
    }

    /// Path to a catalog.
    pub fn catalog(venue_id: VenueId, catalog_id: CatalogId) -> Self {
        Self::Catalog {
            venue_id,
            catalog_id,
        }
    }

    /// Path to an item.
    pub fn item(venue_id: VenueId, catalog_id: CatalogId, item_id: ItemId) -> Self {
        Self::Item {
            venue_id,
            catalog_id,
            item_id,
        }
    }

    /// The venue at the root of the path.
    pub fn venue_id(&self) -> VenueId {
        match self {
            Self::Venue { venue_id }
            | Self::Catalog { venue_id, .. }
            | Self::Item { venue_id, .. } => *venue_id,
        }
    }

    /// Number of links below the owning account.
    pub fn depth(&self) -> usize {
        match self {
            Self::Venue { .. } => 1,
            Self::Catalog { .. } => 2,
            Self::Item { .. } => 3,
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Venue { venue_id } => write!(f, "venues/{venue_id}"),
            Self::Catalog {
                venue_id,
                catalog_id,
            } => write!(f, "venues/{venue_id}/catalogs/{catalog_id}"),
            Self::Item {
                venue_id,
                catalog_id,
                item_id,
            } => write!(
                f,
                "venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}"
            ),
        }
    }
}
