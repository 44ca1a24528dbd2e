//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use venuehub_entity::catalog::CatalogFields;
use venuehub_entity::item::ItemFields;
use venuehub_entity::venue::VenueFields;
use venuehub_service::SignupInput;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Given name.
    #[validate(custom(function = "not_blank", message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(custom(function = "not_blank", message = "Last name is required"))]
    pub last_name: String,
    /// Login email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password; the length policy is enforced by the account service.
    pub password: String,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create or replace a venue.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VenueRequest {
    /// Display name.
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "not_blank", message = "Title is required")
    )]
    pub title: String,
    /// Venue type, sent as `type`.
    #[serde(rename = "type")]
    #[validate(
        length(max = 255, message = "Type must be at most 255 characters"),
        custom(function = "not_blank", message = "Type is required")
    )]
    pub kind: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: String,
    /// Street address.
    #[serde(default)]
    #[validate(length(max = 255))]
    pub address: String,
    /// Contact phone.
    #[serde(default)]
    #[validate(length(max = 255))]
    pub phone: String,
}

impl From<VenueRequest> for VenueFields {
    fn from(req: VenueRequest) -> Self {
        Self {
            title: req.title,
            kind: req.kind,
            description: req.description,
            address: req.address,
            phone: req.phone,
        }
    }
}

/// Create or replace a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CatalogRequest {
    /// Catalog title.
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "not_blank", message = "Title is required")
    )]
    pub title: String,
}

impl From<CatalogRequest> for CatalogFields {
    fn from(req: CatalogRequest) -> Self {
        Self { title: req.title }
    }
}

/// Create or replace an item. The likes counter is not client-writable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemRequest {
    /// Item title.
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "not_blank", message = "Title is required")
    )]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: String,
    /// Picture URL.
    #[serde(default)]
    pub picture: String,
    /// Price in hryvnias.
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price_uah: i64,
}

impl From<ItemRequest> for ItemFields {
    fn from(req: ItemRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            picture: req.picture,
            price_uah: req.price_uah,
        }
    }
}
