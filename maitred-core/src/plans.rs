//! Subscription plans, statuses, and the feature catalog.
//!
//! Every product capability is classified as exactly one of BASIC or
//! PREMIUM. A BASIC subscription grants the BASIC set; PREMIUM grants
//! the union. Classification is a property of the feature, not of the
//! caller, so a BASIC capability can never be blocked by plan — only by
//! a non-ACTIVE subscription status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plan {
    Basic,
    Premium,
}

/// Subscription lifecycle status. Only `Active` admits gated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Cancelled,
    Expired,
}

/// Named units of product functionality gated by subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    // BASIC tier
    Menu,
    QrOrdering,
    WaiterDashboard,
    OrderManagement,
    Kds,
    Realtime,
    Feedback,
    Analytics,
    MultiLanguage,
    PushNotifications,
    Pwa,
    Modifiers,
    // PREMIUM tier
    Billing,
    StripePayments,
    Inventory,
    StaffManagement,
    Reservations,
    Loyalty,
    DynamicPricing,
    WaitTime,
    DeliveryTakeout,
    Receipts,
    OrderHistory,
}

pub const BASIC_FEATURES: [Feature; 12] = [
    Feature::Menu,
    Feature::QrOrdering,
    Feature::WaiterDashboard,
    Feature::OrderManagement,
    Feature::Kds,
    Feature::Realtime,
    Feature::Feedback,
    Feature::Analytics,
    Feature::MultiLanguage,
    Feature::PushNotifications,
    Feature::Pwa,
    Feature::Modifiers,
];

pub const PREMIUM_FEATURES: [Feature; 11] = [
    Feature::Billing,
    Feature::StripePayments,
    Feature::Inventory,
    Feature::StaffManagement,
    Feature::Reservations,
    Feature::Loyalty,
    Feature::DynamicPricing,
    Feature::WaitTime,
    Feature::DeliveryTakeout,
    Feature::Receipts,
    Feature::OrderHistory,
];

impl Feature {
    /// `true` if this capability belongs to the PREMIUM tier.
    pub fn is_premium(&self) -> bool {
        match self {
            Feature::Menu
            | Feature::QrOrdering
            | Feature::WaiterDashboard
            | Feature::OrderManagement
            | Feature::Kds
            | Feature::Realtime
            | Feature::Feedback
            | Feature::Analytics
            | Feature::MultiLanguage
            | Feature::PushNotifications
            | Feature::Pwa
            | Feature::Modifiers => false,
            Feature::Billing
            | Feature::StripePayments
            | Feature::Inventory
            | Feature::StaffManagement
            | Feature::Reservations
            | Feature::Loyalty
            | Feature::DynamicPricing
            | Feature::WaitTime
            | Feature::DeliveryTakeout
            | Feature::Receipts
            | Feature::OrderHistory => true,
        }
    }

    /// Wire name (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Menu => "menu",
            Feature::QrOrdering => "qr_ordering",
            Feature::WaiterDashboard => "waiter_dashboard",
            Feature::OrderManagement => "order_management",
            Feature::Kds => "kds",
            Feature::Realtime => "realtime",
            Feature::Feedback => "feedback",
            Feature::Analytics => "analytics",
            Feature::MultiLanguage => "multi_language",
            Feature::PushNotifications => "push_notifications",
            Feature::Pwa => "pwa",
            Feature::Modifiers => "modifiers",
            Feature::Billing => "billing",
            Feature::StripePayments => "stripe_payments",
            Feature::Inventory => "inventory",
            Feature::StaffManagement => "staff_management",
            Feature::Reservations => "reservations",
            Feature::Loyalty => "loyalty",
            Feature::DynamicPricing => "dynamic_pricing",
            Feature::WaitTime => "wait_time",
            Feature::DeliveryTakeout => "delivery_takeout",
            Feature::Receipts => "receipts",
            Feature::OrderHistory => "order_history",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric resource ceilings attached to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanLimit {
    MaxTables,
    MaxMenus,
    MaxMenuItems,
}

impl Plan {
    /// Whether the plan grants the given capability.
    pub fn grants(&self, feature: Feature) -> bool {
        match self {
            Plan::Basic => !feature.is_premium(),
            Plan::Premium => true,
        }
    }

    /// The full capability set unlocked by this plan.
    pub fn features(&self) -> Vec<Feature> {
        match self {
            Plan::Basic => BASIC_FEATURES.to_vec(),
            Plan::Premium => BASIC_FEATURES
                .iter()
                .chain(PREMIUM_FEATURES.iter())
                .copied()
                .collect(),
        }
    }

    /// Resource ceiling for this plan.
    pub fn limit(&self, limit: PlanLimit) -> u32 {
        match (self, limit) {
            (Plan::Basic, PlanLimit::MaxTables) => 5,
            (Plan::Basic, PlanLimit::MaxMenus) => 1,
            (Plan::Basic, PlanLimit::MaxMenuItems) => 50,
            (Plan::Premium, PlanLimit::MaxTables) => 50,
            (Plan::Premium, PlanLimit::MaxMenus) => 10,
            (Plan::Premium, PlanLimit::MaxMenuItems) => 500,
        }
    }
}
