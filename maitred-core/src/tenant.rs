//! Tenant identifiers and the resolved scope contexts the guards attach.
//!
//! Guards never mutate the request; each one produces a new context value
//! that is passed explicitly to the handler.

use serde::{Deserialize, Serialize};

use crate::plans::Plan;
use crate::roles::Role;

/// A hotel (tenant) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotelId(pub String);

impl HotelId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HotelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The effective tenant for a request, as resolved by the tenant-scope
/// guard. `hotel_id` is always present and caller-authorized: handlers
/// use it directly as a storage filter and perform no ownership checks
/// of their own.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantScope {
    pub identity_id: String,
    pub role: Role,
    pub hotel_id: HotelId,
}

/// Scope plus entitlement, as resolved by the feature guard.
///
/// `hotel_id` is `None` only for a platform caller invoking a
/// tenant-agnostic operation without explicit scope; tenant callers
/// always carry their own hotel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitledScope {
    pub identity_id: String,
    pub role: Role,
    pub hotel_id: Option<HotelId>,
    pub plan: Plan,
}
