//! maitred-server: the HTTP transport.
//!
//! Composes the router, the guard chain (authentication, role,
//! tenant scope, feature entitlement), the browser gateway interceptor,
//! and the JSON handlers for the tenant/subscription admin surface.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod gateway;
pub mod guards;
pub mod handlers;
pub mod state;

pub use app::build_router;
pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
