// Router assembly.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::gateway;
use crate::handlers;
use crate::state::AppState;

/// Build the full router: the `/api` surface plus the gateway
/// interceptor over page paths, wrapped in tracing and request-id
/// propagation.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/sign-in", post(handlers::auth::sign_in))
        .route(
            "/hotels",
            get(handlers::hotels::list).post(handlers::hotels::create),
        )
        .route(
            "/hotels/{hotel_id}",
            get(handlers::hotels::get)
                .put(handlers::hotels::update)
                .patch(handlers::hotels::toggle),
        )
        .route(
            "/hotels/{hotel_id}/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/hotels/{hotel_id}/subscription",
            get(handlers::subscriptions::for_hotel),
        )
        .route("/subscriptions", get(handlers::subscriptions::list))
        .route(
            "/subscriptions/{id}",
            get(handlers::subscriptions::get).put(handlers::subscriptions::update),
        )
        .route("/orders", get(handlers::gated::orders))
        .route("/inventory", get(handlers::gated::inventory));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gateway::intercept,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
