//! The guard chain.
//!
//! Guards compose role -> tenant scope -> feature entitlement. Each step
//! takes the previous step's output and returns a new context value; the
//! request itself is never mutated. Handlers receive the final context
//! and use it directly, without ownership checks of their own.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use maitred_auth::{parse_bearer, Claims};
use maitred_core::{
    EntitledScope, Error, Feature, HotelId, Plan, Result, Role, SubscriptionStatus, TenantScope,
};
use maitred_store::SubscriptionStore;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

pub const AUTH_REQUIRED: &str = "Authentication required";
pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

/// Pull a session token out of the request headers: `Authorization`
/// bearer first, then the `session` cookie set by the browser flow.
pub(crate) fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Some(token) = value.to_str().ok().and_then(parse_bearer) {
            return Some(token.to_string());
        }
    }

    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "session" && !value.is_empty()).then(|| value.to_string())
    })
}

/// Verified session claims; the entry point of every guarded route.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers)
            .ok_or_else(|| Error::not_authenticated(AUTH_REQUIRED))?;
        let claims = state
            .auth
            .verify(&token)
            .map_err(|_| Error::not_authenticated(AUTH_REQUIRED))?;
        Ok(Self { claims })
    }
}

impl AuthContext {
    /// Role allow-list check. Callers outside the list get an opaque 403.
    pub fn require_role(&self, allowed: &[Role]) -> Result<()> {
        if allowed.contains(&self.claims.role) {
            return Ok(());
        }
        Err(Error::forbidden(INSUFFICIENT_PERMISSIONS))
    }
}

/// Resolve the effective tenant for this request.
///
/// Platform callers must name the tenant explicitly; tenant callers are
/// pinned to their own hotel, and naming a different one is rejected
/// rather than silently overridden.
pub fn resolve_tenant_scope(auth: &AuthContext, param: Option<&HotelId>) -> Result<TenantScope> {
    let claims = &auth.claims;

    if claims.role.is_super_admin() {
        let hotel_id = param.cloned().ok_or_else(|| {
            Error::bad_request("hotel_id query parameter required for SUPER_ADMIN")
        })?;
        return Ok(TenantScope {
            identity_id: claims.sub.clone(),
            role: claims.role,
            hotel_id,
        });
    }

    let own = claims
        .hotel_id
        .clone()
        .ok_or_else(|| Error::forbidden("No hotel associated with this account"))?;

    if let Some(requested) = param {
        if requested != &own {
            return Err(Error::forbidden(INSUFFICIENT_PERMISSIONS));
        }
    }

    Ok(TenantScope {
        identity_id: claims.sub.clone(),
        role: claims.role,
        hotel_id: own,
    })
}

/// Resolve tenant scope and check the subscription entitlement for a
/// capability.
///
/// Platform callers bypass entitlement entirely. For tenant callers the
/// subscription is read through the cache; it must exist and be ACTIVE
/// for any gated capability, and a PREMIUM capability additionally
/// requires the PREMIUM plan. The upgrade rejection carries a structured
/// payload so clients can render the prompt.
pub async fn require_feature(
    state: &AppState,
    auth: &AuthContext,
    param: Option<&HotelId>,
    feature: Feature,
) -> Result<EntitledScope> {
    let claims = &auth.claims;

    if claims.role.is_super_admin() {
        return Ok(EntitledScope {
            identity_id: claims.sub.clone(),
            role: claims.role,
            hotel_id: param.cloned(),
            plan: Plan::Premium,
        });
    }

    let scope = resolve_tenant_scope(auth, param)?;

    let subscription = match state.cache.get(&scope.hotel_id) {
        Some(cached) => cached,
        None => {
            // Snapshot before the read so a concurrent invalidate drops
            // this populate instead of resurrecting the old row.
            let generation = state.cache.generation();
            let fresh = state
                .subscriptions
                .subscription_for_hotel(&scope.hotel_id)
                .await
                .map_err(Error::from)?
                .ok_or_else(|| Error::forbidden("Subscription required"))?;
            state.cache.put(fresh.clone(), generation);
            fresh
        }
    };

    if subscription.status != SubscriptionStatus::Active {
        return Err(Error::forbidden("Active subscription required"));
    }

    // Classification first: a BASIC capability is never plan-blocked.
    if feature.is_premium() && subscription.plan != Plan::Premium {
        return Err(
            Error::forbidden("This feature requires a Premium plan").with_data(json!({
                "feature": feature.as_str(),
                "requiredPlan": "PREMIUM",
            })),
        );
    }

    Ok(EntitledScope {
        identity_id: scope.identity_id,
        role: scope.role,
        hotel_id: Some(scope.hotel_id),
        plan: subscription.plan,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use maitred_auth::AuthOptions;
    use maitred_store::MemoryStore;

    use super::*;

    fn auth(role: Role, hotel_id: Option<&str>) -> AuthContext {
        AuthContext {
            claims: Claims {
                sub: "user-1".to_string(),
                role,
                hotel_id: hotel_id.map(HotelId::new),
                iss: "maitred".to_string(),
                aud: vec!["https://maitred.dev".to_string()],
                iat: 0,
                exp: i64::MAX,
                jti: "jti-1".to_string(),
            },
        }
    }

    #[test]
    fn role_allow_list() {
        let admin = auth(Role::Admin, Some("hotel-1"));
        assert!(admin.require_role(&[Role::SuperAdmin, Role::Admin]).is_ok());

        let err = admin.require_role(&[Role::SuperAdmin]).unwrap_err();
        assert_eq!(err.code(), 403);
        assert_eq!(err.message, INSUFFICIENT_PERMISSIONS);
    }

    #[test]
    fn super_admin_must_name_a_tenant() {
        let root = auth(Role::SuperAdmin, None);

        let err = resolve_tenant_scope(&root, None).unwrap_err();
        assert_eq!(err.code(), 400);

        let scope = resolve_tenant_scope(&root, Some(&HotelId::new("hotel-9"))).unwrap();
        assert_eq!(scope.hotel_id, HotelId::new("hotel-9"));
    }

    #[test]
    fn tenant_caller_is_pinned_to_own_hotel() {
        let admin = auth(Role::Admin, Some("hotel-1"));

        let scope = resolve_tenant_scope(&admin, None).unwrap();
        assert_eq!(scope.hotel_id, HotelId::new("hotel-1"));

        // Matching parameter is fine, a foreign one is rejected.
        assert!(resolve_tenant_scope(&admin, Some(&HotelId::new("hotel-1"))).is_ok());
        let err = resolve_tenant_scope(&admin, Some(&HotelId::new("hotel-2"))).unwrap_err();
        assert_eq!(err.code(), 403);
    }

    #[test]
    fn tenant_caller_without_hotel_is_rejected() {
        let orphan = auth(Role::Manager, None);
        let err = resolve_tenant_scope(&orphan, None).unwrap_err();
        assert_eq!(err.code(), 403);
        assert_eq!(err.message, "No hotel associated with this account");
    }

    #[tokio::test]
    async fn tenant_without_subscription_row_is_rejected() {
        // An empty backend: the caller's claims name a hotel, but no
        // subscription was ever written for it.
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            AuthOptions {
                bcrypt_cost: 4,
                ..AuthOptions::default()
            },
        );
        let admin = auth(Role::Admin, Some("hotel-1"));

        let err = require_feature(&state, &admin, None, Feature::Menu)
            .await
            .unwrap_err();
        assert_eq!(err.code(), 403);
        assert_eq!(err.message, "Subscription required");

        // The failed lookup must not leave a cache entry behind.
        assert!(state.cache.get(&HotelId::new("hotel-1")).is_none());
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
        headers.insert(header::COOKIE, "session=from-cookie".parse().unwrap());
        assert_eq!(token_from_headers(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn session_cookie_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; session=abc123; lang=en".parse().unwrap(),
        );
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc123"));

        let empty = HeaderMap::new();
        assert_eq!(token_from_headers(&empty), None);
    }
}
