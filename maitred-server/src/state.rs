// Shared application state.

use std::sync::Arc;

use maitred_auth::{AuthOptions, AuthService};
use maitred_store::{
    HotelStore, IdentityStore, MemoryStore, SubscriptionCache, SubscriptionStore,
};

/// The composition root: stores behind their trait seams, the sign-in
/// service, and the injectable subscription cache.
#[derive(Clone)]
pub struct AppState {
    pub identities: Arc<dyn IdentityStore>,
    pub hotels: Arc<dyn HotelStore>,
    pub subscriptions: Arc<dyn SubscriptionStore>,
    pub auth: Arc<AuthService>,
    pub cache: Arc<SubscriptionCache>,
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Wire everything to a single in-memory backend.
    pub fn new(store: Arc<MemoryStore>, options: AuthOptions) -> Self {
        let bcrypt_cost = options.bcrypt_cost;
        Self {
            auth: Arc::new(AuthService::new(store.clone(), options)),
            identities: store.clone(),
            hotels: store.clone(),
            subscriptions: store,
            cache: Arc::new(SubscriptionCache::new()),
            bcrypt_cost,
        }
    }
}
