// Subscription cache.

use std::collections::HashMap;

use maitred_core::{HotelId, Subscription};
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct Slots {
    generation: u64,
    map: HashMap<HotelId, Subscription>,
}

/// Read-through cache of each hotel's current subscription.
///
/// Owned by the composition root and injected where needed; never a
/// module-global. Readers snapshot [`generation`](Self::generation)
/// before fetching from storage and pass it to [`put`](Self::put);
/// `invalidate` bumps the generation, so a populate that raced a
/// mutation is dropped instead of re-inserting the pre-update row.
#[derive(Debug, Default)]
pub struct SubscriptionCache {
    slots: RwLock<Slots>,
}

impl SubscriptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hotel_id: &HotelId) -> Option<Subscription> {
        self.slots.read().map.get(hotel_id).cloned()
    }

    /// Snapshot to take before a storage read that will be `put` back.
    pub fn generation(&self) -> u64 {
        self.slots.read().generation
    }

    /// Insert a freshly read entry, unless an `invalidate` ran since
    /// `generation` was observed.
    pub fn put(&self, subscription: Subscription, generation: u64) {
        let mut slots = self.slots.write();
        if slots.generation != generation {
            return;
        }
        slots.map.insert(subscription.hotel_id.clone(), subscription);
    }

    pub fn invalidate(&self, hotel_id: &HotelId) {
        let mut slots = self.slots.write();
        slots.generation += 1;
        slots.map.remove(hotel_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use maitred_core::{Plan, SubscriptionStatus};

    fn subscription(plan: Plan) -> Subscription {
        Subscription {
            id: "sub-1".to_string(),
            hotel_id: HotelId::new("hotel-1"),
            plan,
            status: SubscriptionStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn put_get_invalidate() {
        let cache = SubscriptionCache::new();
        let hotel = HotelId::new("hotel-1");

        assert!(cache.get(&hotel).is_none());

        cache.put(subscription(Plan::Basic), cache.generation());
        assert_eq!(cache.get(&hotel).unwrap().plan, Plan::Basic);

        cache.invalidate(&hotel);
        assert!(cache.get(&hotel).is_none());
    }

    #[test]
    fn last_writer_wins() {
        let cache = SubscriptionCache::new();
        cache.put(subscription(Plan::Basic), cache.generation());
        cache.put(subscription(Plan::Premium), cache.generation());
        assert_eq!(
            cache.get(&HotelId::new("hotel-1")).unwrap().plan,
            Plan::Premium
        );
    }

    #[test]
    fn stale_populate_is_dropped_after_invalidate() {
        let cache = SubscriptionCache::new();
        let hotel = HotelId::new("hotel-1");

        // A reader snapshots the generation and fetches the old row,
        // then a mutation invalidates before the reader's put lands.
        let generation = cache.generation();
        let pre_update = subscription(Plan::Basic);
        cache.invalidate(&hotel);

        cache.put(pre_update, generation);
        assert!(cache.get(&hotel).is_none());

        // A fresh read-through after the mutation still populates.
        cache.put(subscription(Plan::Premium), cache.generation());
        assert_eq!(cache.get(&hotel).unwrap().plan, Plan::Premium);
    }
}
