//! In-memory reference backend.
//!
//! All aggregates live behind one `parking_lot::RwLock`, so provisioning
//! runs its uniqueness checks and its inserts under a single write lock:
//! either every row lands or none does, matching the transactional
//! contract a SQL backend would satisfy with an explicit transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use maitred_core::{
    Hotel, HotelId, Identity, Plan, Subscription, SubscriptionStatus, UpdateHotelInput,
};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    slug, HotelStore, HotelSummary, IdentityStore, NewIdentity, ProvisionHotel, ProvisionedHotel,
    StoreError, SubscriptionStore,
};

#[derive(Default)]
struct Inner {
    identities: HashMap<String, Identity>,
    hotels: HashMap<String, Hotel>,
    subscriptions: HashMap<String, Subscription>,
}

/// In-memory backend for testing and development.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn identity_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .identities
            .values()
            .find(|identity| identity.email == email)
            .cloned())
    }

    async fn identity_by_id(&self, id: &str) -> Result<Option<Identity>, StoreError> {
        Ok(self.inner.read().identities.get(id).cloned())
    }

    async fn create_identity(&self, new: NewIdentity) -> Result<Identity, StoreError> {
        let mut inner = self.inner.write();
        if inner
            .identities
            .values()
            .any(|identity| identity.email == new.email)
        {
            return Err(StoreError::DuplicateEmail);
        }

        let identity = Identity {
            id: new_id(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            hotel_id: new.hotel_id,
            is_active: true,
            created_at: Utc::now(),
        };
        inner
            .identities
            .insert(identity.id.clone(), identity.clone());
        Ok(identity)
    }

    async fn identities_for_hotel(&self, hotel_id: &HotelId) -> Result<Vec<Identity>, StoreError> {
        let inner = self.inner.read();
        let mut users: Vec<Identity> = inner
            .identities
            .values()
            .filter(|identity| identity.hotel_id.as_ref() == Some(hotel_id))
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn set_identity_active(&self, id: &str, active: bool) -> Result<Identity, StoreError> {
        let mut inner = self.inner.write();
        let identity = inner
            .identities
            .get_mut(id)
            .ok_or(StoreError::UserNotFound)?;
        identity.is_active = active;
        Ok(identity.clone())
    }
}

#[async_trait]
impl HotelStore for MemoryStore {
    async fn provision_hotel(&self, input: ProvisionHotel) -> Result<ProvisionedHotel, StoreError> {
        let mut inner = self.inner.write();

        // Uniqueness checks happen before any insert: provisioning is
        // all-or-nothing.
        if let Some(admin) = &input.admin {
            if inner
                .identities
                .values()
                .any(|identity| identity.email == admin.email)
            {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let base = input
            .requested_slug
            .as_deref()
            .map(slug::generate_slug)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slug::generate_slug(&input.name));
        let base = if base.is_empty() {
            "hotel".to_string()
        } else {
            base
        };
        let unique =
            slug::uniquify(&base, |candidate| {
                inner.hotels.values().any(|h| h.slug == candidate)
            });

        let now = Utc::now();
        let hotel = Hotel {
            id: HotelId::new(new_id()),
            name: input.name,
            slug: unique,
            description: input.description,
            address: input.address,
            phone: input.phone,
            email: input.email,
            website: input.website,
            currency: input.currency,
            timezone: input.timezone,
            is_active: true,
            created_at: now,
        };

        let subscription = Subscription {
            id: new_id(),
            hotel_id: hotel.id.clone(),
            plan: Plan::Basic,
            status: SubscriptionStatus::Active,
            created_at: now,
            updated_at: now,
        };

        let admin = input.admin.map(|bootstrap| Identity {
            id: new_id(),
            name: bootstrap.name,
            email: bootstrap.email,
            password_hash: bootstrap.password_hash,
            role: maitred_core::Role::Admin,
            hotel_id: Some(hotel.id.clone()),
            is_active: true,
            created_at: now,
        });

        tracing::debug!(hotel_id = %hotel.id, slug = %hotel.slug, "provisioning hotel");
        inner.hotels.insert(hotel.id.0.clone(), hotel.clone());
        inner
            .subscriptions
            .insert(subscription.id.clone(), subscription.clone());
        if let Some(admin) = &admin {
            inner.identities.insert(admin.id.clone(), admin.clone());
        }

        Ok(ProvisionedHotel {
            hotel,
            subscription,
            admin,
        })
    }

    async fn hotel_by_id(&self, id: &HotelId) -> Result<Option<Hotel>, StoreError> {
        Ok(self.inner.read().hotels.get(&id.0).cloned())
    }

    async fn list_hotels(&self) -> Result<Vec<HotelSummary>, StoreError> {
        let inner = self.inner.read();
        let mut rows: Vec<HotelSummary> = inner
            .hotels
            .values()
            .map(|hotel| HotelSummary {
                hotel: hotel.clone(),
                subscription: inner
                    .subscriptions
                    .values()
                    .find(|s| s.hotel_id == hotel.id)
                    .cloned(),
                user_count: inner
                    .identities
                    .values()
                    .filter(|identity| identity.hotel_id.as_ref() == Some(&hotel.id))
                    .count(),
            })
            .collect();
        rows.sort_by(|a, b| b.hotel.created_at.cmp(&a.hotel.created_at));
        Ok(rows)
    }

    async fn update_hotel(
        &self,
        id: &HotelId,
        input: UpdateHotelInput,
    ) -> Result<Hotel, StoreError> {
        let mut inner = self.inner.write();
        let hotel = inner.hotels.get_mut(&id.0).ok_or(StoreError::HotelNotFound)?;

        if let Some(name) = input.name {
            hotel.name = name;
        }
        if let Some(description) = input.description {
            hotel.description = Some(description);
        }
        if let Some(address) = input.address {
            hotel.address = Some(address);
        }
        if let Some(phone) = input.phone {
            hotel.phone = Some(phone);
        }
        if let Some(email) = input.email {
            hotel.email = Some(email);
        }
        if let Some(website) = input.website {
            hotel.website = Some(website);
        }
        if let Some(currency) = input.currency {
            hotel.currency = Some(currency);
        }
        if let Some(timezone) = input.timezone {
            hotel.timezone = Some(timezone);
        }

        Ok(hotel.clone())
    }

    async fn toggle_hotel_active(&self, id: &HotelId) -> Result<Hotel, StoreError> {
        let mut inner = self.inner.write();
        let hotel = inner.hotels.get_mut(&id.0).ok_or(StoreError::HotelNotFound)?;
        hotel.is_active = !hotel.is_active;
        Ok(hotel.clone())
    }
}

#[async_trait]
impl SubscriptionStore for MemoryStore {
    async fn subscription_for_hotel(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<Subscription>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .subscriptions
            .values()
            .find(|s| &s.hotel_id == hotel_id)
            .cloned())
    }

    async fn subscription_by_id(&self, id: &str) -> Result<Option<Subscription>, StoreError> {
        Ok(self.inner.read().subscriptions.get(id).cloned())
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, StoreError> {
        let inner = self.inner.read();
        let mut rows: Vec<Subscription> = inner.subscriptions.values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update_subscription(
        &self,
        id: &str,
        plan: Option<Plan>,
        status: Option<SubscriptionStatus>,
    ) -> Result<Subscription, StoreError> {
        let mut inner = self.inner.write();
        let subscription = inner
            .subscriptions
            .get_mut(id)
            .ok_or(StoreError::SubscriptionNotFound)?;

        if let Some(plan) = plan {
            subscription.plan = plan;
        }
        if let Some(status) = status {
            subscription.status = status;
        }
        subscription.updated_at = Utc::now();

        Ok(subscription.clone())
    }
}

/// The sign-in service reaches identities through this seam.
#[async_trait]
impl maitred_auth::IdentityResolver for MemoryStore {
    async fn identity_by_email(&self, email: &str) -> maitred_core::Result<Option<Identity>> {
        IdentityStore::identity_by_email(self, email)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maitred_core::Role;

    fn provision(name: &str, admin_email: Option<&str>) -> ProvisionHotel {
        ProvisionHotel {
            name: name.to_string(),
            requested_slug: None,
            description: None,
            address: None,
            phone: None,
            email: None,
            website: None,
            currency: None,
            timezone: None,
            admin: admin_email.map(|email| crate::AdminBootstrap {
                name: "Ana".to_string(),
                email: email.to_string(),
                password_hash: "hash".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn provisioning_creates_hotel_subscription_and_admin() {
        let store = MemoryStore::new();
        let out = store
            .provision_hotel(provision("Demo Hotel", Some("ana@example.com")))
            .await
            .unwrap();

        assert_eq!(out.hotel.slug, "demo-hotel");
        assert!(out.hotel.is_active);
        assert_eq!(out.subscription.plan, Plan::Basic);
        assert_eq!(out.subscription.status, SubscriptionStatus::Active);
        assert_eq!(out.subscription.hotel_id, out.hotel.id);

        let admin = out.admin.unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.hotel_id, Some(out.hotel.id.clone()));

        let listed = store.list_hotels().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_count, 1);
    }

    #[tokio::test]
    async fn provisioning_rolls_back_on_admin_email_conflict() {
        let store = MemoryStore::new();
        store
            .create_identity(NewIdentity {
                name: "Existing".to_string(),
                email: "taken@example.com".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Manager,
                hotel_id: None,
            })
            .await
            .unwrap();

        let err = store
            .provision_hotel(provision("Demo Hotel", Some("taken@example.com")))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));

        // No partial rows: the hotel must not be visible.
        assert!(store.list_hotels().await.unwrap().is_empty());
        assert!(store.list_subscriptions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn same_name_yields_suffixed_slugs() {
        let store = MemoryStore::new();
        let first = store
            .provision_hotel(provision("Demo Hotel", None))
            .await
            .unwrap();
        let second = store
            .provision_hotel(provision("Demo Hotel", None))
            .await
            .unwrap();

        assert_eq!(first.hotel.slug, "demo-hotel");
        assert_eq!(second.hotel.slug, "demo-hotel-1");
    }

    #[tokio::test]
    async fn update_touches_only_mutable_fields() {
        let store = MemoryStore::new();
        let out = store
            .provision_hotel(provision("Demo Hotel", None))
            .await
            .unwrap();

        let updated = store
            .update_hotel(
                &out.hotel.id,
                UpdateHotelInput {
                    name: Some("Demo Hotel & Spa".to_string()),
                    description: Some("Beachfront".to_string()),
                    ..UpdateHotelInput::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Demo Hotel & Spa");
        assert_eq!(updated.description.as_deref(), Some("Beachfront"));
        // Slug is immutable once assigned.
        assert_eq!(updated.slug, "demo-hotel");
    }

    #[tokio::test]
    async fn toggle_active_flips_state() {
        let store = MemoryStore::new();
        let out = store
            .provision_hotel(provision("Demo Hotel", None))
            .await
            .unwrap();

        let off = store.toggle_hotel_active(&out.hotel.id).await.unwrap();
        assert!(!off.is_active);
        let on = store.toggle_hotel_active(&out.hotel.id).await.unwrap();
        assert!(on.is_active);
    }

    #[tokio::test]
    async fn subscription_update_applies_partial_fields() {
        let store = MemoryStore::new();
        let out = store
            .provision_hotel(provision("Demo Hotel", None))
            .await
            .unwrap();

        let upgraded = store
            .update_subscription(&out.subscription.id, Some(Plan::Premium), None)
            .await
            .unwrap();
        assert_eq!(upgraded.plan, Plan::Premium);
        assert_eq!(upgraded.status, SubscriptionStatus::Active);

        let lapsed = store
            .update_subscription(
                &out.subscription.id,
                None,
                Some(SubscriptionStatus::PastDue),
            )
            .await
            .unwrap();
        assert_eq!(lapsed.plan, Plan::Premium);
        assert_eq!(lapsed.status, SubscriptionStatus::PastDue);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryStore::new();
        let new = |email: &str| NewIdentity {
            name: "Max".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: Role::Manager,
            hotel_id: None,
        };

        store.create_identity(new("max@example.com")).await.unwrap();
        let err = store
            .create_identity(new("max@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }
}
