// Subscription administration.

use axum::{
    extract::{Path, State},
    Json,
};
use maitred_core::{Error, HotelId, Role, Subscription, UpdateSubscriptionInput};
use maitred_store::{HotelStore, SubscriptionStore};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::guards::{resolve_tenant_scope, AuthContext};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HotelBrief {
    id: HotelId,
    name: String,
    slug: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRow {
    #[serde(flatten)]
    subscription: Subscription,
    hotel: Option<HotelBrief>,
}

/// `GET /api/hotels/{hotel_id}/subscription` — any authenticated role;
/// tenant callers only for their own hotel.
pub async fn for_hotel(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(hotel_id): Path<String>,
) -> Result<Json<Subscription>, ApiError> {
    let scope = resolve_tenant_scope(&auth, Some(&HotelId::new(hotel_id)))?;

    let subscription = state
        .subscriptions
        .subscription_for_hotel(&scope.hotel_id)
        .await?
        .ok_or_else(|| Error::not_found("Subscription not found"))?;
    Ok(Json(subscription))
}

/// `GET /api/subscriptions` — newest first, each with its hotel.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<Vec<SubscriptionRow>>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;

    let mut rows = Vec::new();
    for subscription in state.subscriptions.list_subscriptions().await? {
        let hotel = state
            .hotels
            .hotel_by_id(&subscription.hotel_id)
            .await?
            .map(|h| HotelBrief {
                id: h.id,
                name: h.name,
                slug: h.slug,
            });
        rows.push(SubscriptionRow {
            subscription,
            hotel,
        });
    }
    Ok(Json(rows))
}

/// `GET /api/subscriptions/{id}`
pub async fn get(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<Json<Subscription>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;

    let subscription = state
        .subscriptions
        .subscription_by_id(&id)
        .await?
        .ok_or_else(|| Error::not_found("Subscription not found"))?;
    Ok(Json(subscription))
}

/// `PUT /api/subscriptions/{id}` — change plan and/or status, then drop
/// the cached entry so the next gated request sees the new entitlement.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
    Json(input): Json<UpdateSubscriptionInput>,
) -> Result<Json<Value>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;
    input.validate()?;

    let subscription = state
        .subscriptions
        .update_subscription(&id, input.plan, input.status)
        .await?;
    state.cache.invalidate(&subscription.hotel_id);

    tracing::info!(
        subscription_id = %subscription.id,
        hotel_id = %subscription.hotel_id,
        plan = ?subscription.plan,
        status = ?subscription.status,
        "subscription updated"
    );

    Ok(Json(json!(subscription)))
}
