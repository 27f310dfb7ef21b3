//! maitred-core: transport-agnostic core for the maitred admin platform.
//!
//! Holds the pieces every other crate agrees on: the error taxonomy with
//! its HTTP mapping, the closed role and plan/feature models, tenant
//! identifiers and resolved scope contexts, and the domain records with
//! their validated input types.

pub mod errors;
pub mod models;
pub mod plans;
pub mod roles;
pub mod tenant;

pub use errors::{Error, ErrorKind, Result};
pub use models::{
    CreateHotelInput, CreateHotelUserInput, Hotel, Identity, Subscription,
    UpdateHotelInput, UpdateSubscriptionInput, UserView,
};
pub use plans::{Feature, Plan, PlanLimit, SubscriptionStatus};
pub use roles::Role;
pub use tenant::{EntitledScope, HotelId, TenantScope};
