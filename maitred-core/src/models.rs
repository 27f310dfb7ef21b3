//! Domain records and validated input types.
//!
//! `Identity` deliberately does not implement `Serialize`: credential
//! hashes never travel. Responses use [`UserView`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{Error, Result};
use crate::plans::{Plan, SubscriptionStatus};
use crate::roles::Role;
use crate::tenant::HotelId;

/// An authenticated actor. `hotel_id` is `None` only for the platform
/// tier; every other role is pinned to exactly one hotel.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub hotel_id: Option<HotelId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Credential-free projection of an [`Identity`] for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub hotel_id: Option<HotelId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for UserView {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            hotel_id: identity.hotel_id.clone(),
            is_active: identity.is_active,
            created_at: identity.created_at,
        }
    }
}

/// One customer organization. The slug is globally unique and immutable
/// once assigned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A hotel's commercial entitlement. Exactly one per hotel, created in
/// the same transaction as the hotel, defaulting to BASIC/ACTIVE.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub hotel_id: HotelId,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for provisioning a hotel, its subscription, and an optional
/// first admin account as one atomic unit.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelInput {
    #[validate(length(min = 2, message = "Hotel name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 2, message = "Slug must be at least 2 characters"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub website: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    #[validate(length(min = 2, message = "Admin name required"))]
    pub admin_name: Option<String>,
    #[validate(email(message = "Invalid admin email"))]
    pub admin_email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub admin_password: Option<String>,
}

impl CreateHotelInput {
    /// The admin bootstrap is all-or-nothing: either all three admin
    /// fields are present or none of them count.
    pub fn admin_bootstrap(&self) -> Option<(&str, &str, &str)> {
        match (&self.admin_name, &self.admin_email, &self.admin_password) {
            (Some(name), Some(email), Some(password)) => Some((name, email, password)),
            _ => None,
        }
    }
}

/// Mutable hotel fields. Slug and active flag are never updated here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotelInput {
    #[validate(length(min = 2, message = "Hotel name must be at least 2 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub website: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
}

/// Input for creating a hotel-bound user. Only the two tenant roles are
/// assignable through this surface.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelUserInput {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: Role,
}

impl CreateHotelUserInput {
    pub fn validate_role(&self) -> Result<()> {
        if self.role.is_super_admin() {
            return Err(Error::bad_request(
                "Role must be one of ADMIN, MANAGER",
            ));
        }
        Ok(())
    }
}

/// Plan and/or status change. At least one field must be provided.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionInput {
    pub plan: Option<Plan>,
    pub status: Option<SubscriptionStatus>,
}

impl UpdateSubscriptionInput {
    pub fn validate(&self) -> Result<()> {
        if self.plan.is_none() && self.status.is_none() {
            return Err(Error::bad_request(
                "At least one field (plan or status) must be provided",
            ));
        }
        Ok(())
    }
}

/// Run derive-based validation, mapping failures to the 400-class error
/// with per-field detail.
pub fn validate_input<T: Validate>(input: &T) -> Result<()> {
    input.validate().map_err(|e| {
        let detail = serde_json::to_value(&e).unwrap_or_default();
        Error::bad_request("Invalid input").with_errors(detail)
    })
}
