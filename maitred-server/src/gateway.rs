//! Browser gateway interceptor.
//!
//! Routes page navigation to the right place before the router sees it:
//! unauthenticated visitors land on sign-in with their destination
//! preserved, signed-in users are kept out of the auth pages and out of
//! the other role's section. Advisory only: `/api` is never redirected,
//! the guards are the enforcement layer there.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use maitred_core::Role;

use crate::guards::token_from_headers;
use crate::state::AppState;

/// Pages reachable without a session (guest ordering included).
const PUBLIC_PATHS: [&str; 4] = ["/sign-in", "/sign-up", "/h", "/order"];

/// Auth pages a signed-in user is bounced away from.
const AUTH_PATHS: [&str; 2] = ["/sign-in", "/sign-up"];

/// Platform-tier pages.
const SUPER_ONLY_PATHS: [&str; 3] = ["/hotels", "/subscriptions", "/platform-analytics"];

/// Tenant-tier pages.
const TENANT_ONLY_PATHS: [&str; 13] = [
    "/dashboard",
    "/orders",
    "/scan-order",
    "/tables",
    "/kitchen",
    "/menu-management",
    "/analytics",
    "/qr-codes",
    "/settings",
    "/subscription",
    "/staff",
    "/inventory",
    "/reservations",
];

fn in_set(path: &str, set: &[&str]) -> bool {
    set.iter()
        .any(|p| path == *p || path.starts_with(&format!("{p}/")))
}

fn role_home(role: Role) -> &'static str {
    if role.is_super_admin() {
        "/hotels"
    } else {
        "/dashboard"
    }
}

/// Pure redirect decision: `Some(target)` to redirect, `None` to pass.
fn decide(path: &str, role: Option<Role>) -> Option<String> {
    let Some(role) = role else {
        if in_set(path, &PUBLIC_PATHS) {
            return None;
        }
        return Some(format!("/sign-in?callback_url={path}"));
    };

    if path == "/" || in_set(path, &AUTH_PATHS) {
        return Some(role_home(role).to_string());
    }

    if role.is_super_admin() && in_set(path, &TENANT_ONLY_PATHS) {
        return Some("/hotels".to_string());
    }
    if !role.is_super_admin() && in_set(path, &SUPER_ONLY_PATHS) {
        return Some("/dashboard".to_string());
    }

    None
}

/// Middleware entry point. Verifies the session (header or cookie) and
/// applies [`decide`] to page paths.
pub async fn intercept(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if path.starts_with("/api") {
        return next.run(req).await;
    }

    let role = token_from_headers(req.headers())
        .and_then(|token| state.auth.verify(&token).ok())
        .map(|claims| claims.role);

    match decide(&path, role) {
        Some(target) => {
            tracing::debug!(%path, %target, "gateway redirect");
            Redirect::temporary(&target).into_response()
        }
        None => next.run(req).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_protected_page_goes_to_sign_in() {
        assert_eq!(
            decide("/dashboard", None).as_deref(),
            Some("/sign-in?callback_url=/dashboard")
        );
        assert_eq!(
            decide("/hotels/abc", None).as_deref(),
            Some("/sign-in?callback_url=/hotels/abc")
        );
    }

    #[test]
    fn unauthenticated_public_pages_pass() {
        assert_eq!(decide("/sign-in", None), None);
        assert_eq!(decide("/h/demo-hotel", None), None);
        assert_eq!(decide("/order/table-4", None), None);
    }

    #[test]
    fn signed_in_users_are_bounced_off_auth_pages() {
        assert_eq!(
            decide("/sign-in", Some(Role::SuperAdmin)).as_deref(),
            Some("/hotels")
        );
        assert_eq!(
            decide("/sign-up", Some(Role::Manager)).as_deref(),
            Some("/dashboard")
        );
    }

    #[test]
    fn super_admin_is_kept_out_of_tenant_pages() {
        assert_eq!(
            decide("/dashboard", Some(Role::SuperAdmin)).as_deref(),
            Some("/hotels")
        );
        assert_eq!(decide("/hotels", Some(Role::SuperAdmin)), None);
    }

    #[test]
    fn tenant_roles_are_kept_out_of_platform_pages() {
        assert_eq!(
            decide("/hotels", Some(Role::Admin)).as_deref(),
            Some("/dashboard")
        );
        assert_eq!(
            decide("/platform-analytics", Some(Role::Manager)).as_deref(),
            Some("/dashboard")
        );
        assert_eq!(decide("/orders", Some(Role::Manager)), None);
    }

    #[test]
    fn prefix_matching_respects_segment_boundaries() {
        // "/ordership" is not "/order" or "/orders".
        assert!(decide("/ordership", Some(Role::Admin)).is_none());
        assert_eq!(
            decide("/ordership", None).as_deref(),
            Some("/sign-in?callback_url=/ordership")
        );
    }

    #[test]
    fn root_goes_to_the_role_home() {
        assert_eq!(decide("/", Some(Role::SuperAdmin)).as_deref(), Some("/hotels"));
        assert_eq!(decide("/", Some(Role::Admin)).as_deref(), Some("/dashboard"));
        assert_eq!(
            decide("/", None).as_deref(),
            Some("/sign-in?callback_url=/")
        );
    }
}
