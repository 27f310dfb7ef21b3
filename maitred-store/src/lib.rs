//! maitred-store: the storage boundary.
//!
//! Repository traits per aggregate (identities, hotels, subscriptions),
//! the in-memory reference backend, slug generation, and the injectable
//! subscription cache. Hotel provisioning is transactional at the trait
//! contract level: hotel + subscription + optional first admin commit
//! together or not at all.

pub mod cache;
pub mod memory;
pub mod slug;

use async_trait::async_trait;
use maitred_core::{
    Hotel, HotelId, Identity, Plan, Role, Subscription, SubscriptionStatus, UpdateHotelInput,
};
use thiserror::Error;

pub use cache::SubscriptionCache;
pub use memory::MemoryStore;

/// Infrastructure errors for storage operations.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Hotel not found")]
    HotelNotFound,

    #[error("Subscription not found")]
    SubscriptionNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("A user with this email already exists")]
    DuplicateEmail,

    #[error("Storage failure: {0}")]
    Internal(String),
}

impl From<StoreError> for maitred_core::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::HotelNotFound
            | StoreError::SubscriptionNotFound
            | StoreError::UserNotFound => maitred_core::Error::not_found(err.to_string()),
            StoreError::DuplicateEmail => maitred_core::Error::conflict(err.to_string()),
            StoreError::Internal(detail) => maitred_core::Error::general_error(detail),
        }
    }
}

/// A new identity record; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub hotel_id: Option<HotelId>,
}

/// First-admin bootstrap rolled into hotel provisioning.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Input for the atomic hotel-provisioning unit.
#[derive(Debug, Clone)]
pub struct ProvisionHotel {
    pub name: String,
    /// Requested slug; collisions are resolved by suffixing either way.
    pub requested_slug: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub admin: Option<AdminBootstrap>,
}

/// Result of provisioning: the hotel, its BASIC/ACTIVE subscription, and
/// the first admin if one was requested.
#[derive(Debug, Clone)]
pub struct ProvisionedHotel {
    pub hotel: Hotel,
    pub subscription: Subscription,
    pub admin: Option<Identity>,
}

/// Listing row: a hotel with its subscription and user count.
#[derive(Debug, Clone)]
pub struct HotelSummary {
    pub hotel: Hotel,
    pub subscription: Option<Subscription>,
    pub user_count: usize,
}

#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn identity_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;
    async fn identity_by_id(&self, id: &str) -> Result<Option<Identity>, StoreError>;
    /// Fails with [`StoreError::DuplicateEmail`] if the email is taken.
    async fn create_identity(&self, new: NewIdentity) -> Result<Identity, StoreError>;
    /// Newest first.
    async fn identities_for_hotel(&self, hotel_id: &HotelId) -> Result<Vec<Identity>, StoreError>;
    /// Soft activation toggle; identities are never hard-deleted.
    async fn set_identity_active(&self, id: &str, active: bool) -> Result<Identity, StoreError>;
}

#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Create hotel + subscription + optional first admin as one atomic
    /// unit. Partial application is an invariant violation.
    async fn provision_hotel(&self, input: ProvisionHotel) -> Result<ProvisionedHotel, StoreError>;
    async fn hotel_by_id(&self, id: &HotelId) -> Result<Option<Hotel>, StoreError>;
    /// Newest first.
    async fn list_hotels(&self) -> Result<Vec<HotelSummary>, StoreError>;
    /// Mutable fields only; slug and active flag are untouched.
    async fn update_hotel(&self, id: &HotelId, input: UpdateHotelInput)
        -> Result<Hotel, StoreError>;
    async fn toggle_hotel_active(&self, id: &HotelId) -> Result<Hotel, StoreError>;
}

#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn subscription_for_hotel(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<Subscription>, StoreError>;
    async fn subscription_by_id(&self, id: &str) -> Result<Option<Subscription>, StoreError>;
    /// Newest first.
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, StoreError>;
    async fn update_subscription(
        &self,
        id: &str,
        plan: Option<Plan>,
        status: Option<SubscriptionStatus>,
    ) -> Result<Subscription, StoreError>;
}
