// Hotel administration (platform tier).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use maitred_auth::hash_password;
use maitred_core::{
    models::validate_input, CreateHotelInput, Error, Hotel, HotelId, Role, Subscription,
    UpdateHotelInput, UserView,
};
use maitred_store::{
    AdminBootstrap, HotelStore, IdentityStore, ProvisionHotel, SubscriptionStore,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::guards::AuthContext;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRow {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub subscription: Option<Subscription>,
    pub user_count: usize,
}

/// `GET /api/hotels` — newest first, with subscription and user count.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<Vec<HotelRow>>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;

    let rows = state
        .hotels
        .list_hotels()
        .await?
        .into_iter()
        .map(|summary| HotelRow {
            hotel: summary.hotel,
            subscription: summary.subscription,
            user_count: summary.user_count,
        })
        .collect();
    Ok(Json(rows))
}

/// `POST /api/hotels` — atomic provisioning of hotel + subscription +
/// optional first admin.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(input): Json<CreateHotelInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;
    validate_input(&input)?;

    let admin = match input.admin_bootstrap() {
        Some((name, email, password)) => Some(AdminBootstrap {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password, state.bcrypt_cost)?,
        }),
        None => None,
    };

    let provisioned = state
        .hotels
        .provision_hotel(ProvisionHotel {
            name: input.name,
            requested_slug: input.slug,
            description: input.description,
            address: input.address,
            phone: input.phone,
            email: input.email,
            website: input.website,
            currency: input.currency,
            timezone: input.timezone,
            admin,
        })
        .await?;

    tracing::info!(
        hotel_id = %provisioned.hotel.id,
        slug = %provisioned.hotel.slug,
        "hotel provisioned"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "hotel": provisioned.hotel,
            "subscription": provisioned.subscription,
            "admin": provisioned.admin.as_ref().map(UserView::from),
        })),
    ))
}

/// `GET /api/hotels/{hotel_id}` — hotel with subscription and sanitized
/// users. Authorization is checked before existence.
pub async fn get(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(hotel_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;

    let hotel_id = HotelId::new(hotel_id);
    let hotel = state
        .hotels
        .hotel_by_id(&hotel_id)
        .await?
        .ok_or_else(|| Error::not_found("Hotel not found"))?;
    let subscription = state.subscriptions.subscription_for_hotel(&hotel_id).await?;
    let users: Vec<UserView> = state
        .identities
        .identities_for_hotel(&hotel_id)
        .await?
        .iter()
        .map(UserView::from)
        .collect();

    Ok(Json(json!({
        "hotel": hotel,
        "subscription": subscription,
        "users": users,
    })))
}

/// `PUT /api/hotels/{hotel_id}` — mutable fields only; the slug is never
/// touched.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(hotel_id): Path<String>,
    Json(input): Json<UpdateHotelInput>,
) -> Result<Json<Hotel>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;
    validate_input(&input)?;

    let hotel = state
        .hotels
        .update_hotel(&HotelId::new(hotel_id), input)
        .await?;
    Ok(Json(hotel))
}

/// `PATCH /api/hotels/{hotel_id}` — toggle the active flag.
pub async fn toggle(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(hotel_id): Path<String>,
) -> Result<Json<Hotel>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;

    let hotel = state
        .hotels
        .toggle_hotel_active(&HotelId::new(hotel_id))
        .await?;
    tracing::info!(hotel_id = %hotel.id, is_active = hotel.is_active, "hotel active flag toggled");
    Ok(Json(hotel))
}
