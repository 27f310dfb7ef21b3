//! JSON handlers for the `/api` surface.

pub mod auth;
pub mod gated;
pub mod hotels;
pub mod subscriptions;
pub mod users;

use serde::Deserialize;

/// Optional tenant selector carried as a query parameter. Only platform
/// callers need it; tenant callers are pinned by their session.
#[derive(Debug, Deserialize)]
pub struct ScopeQuery {
    pub hotel_id: Option<String>,
}
