// Feature-gated mount points.
//
// The ordering and inventory domains themselves live elsewhere; these
// endpoints run the full guard chain and hand back the resolved context
// the domain handlers would receive.

use axum::{
    extract::{Query, State},
    Json,
};
use maitred_core::{EntitledScope, Feature, HotelId};

use crate::error::ApiError;
use crate::guards::{require_feature, AuthContext};
use crate::handlers::ScopeQuery;
use crate::state::AppState;

/// `GET /api/orders` — BASIC `order_management`.
pub async fn orders(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<EntitledScope>, ApiError> {
    let param = query.hotel_id.map(HotelId::new);
    let scope = require_feature(&state, &auth, param.as_ref(), Feature::OrderManagement).await?;
    Ok(Json(scope))
}

/// `GET /api/inventory` — PREMIUM `inventory`.
pub async fn inventory(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<EntitledScope>, ApiError> {
    let param = query.hotel_id.map(HotelId::new);
    let scope = require_feature(&state, &auth, param.as_ref(), Feature::Inventory).await?;
    Ok(Json(scope))
}
