// Hotel user administration (platform tier).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use maitred_auth::hash_password;
use maitred_core::{models::validate_input, CreateHotelUserInput, Error, HotelId, Role, UserView};
use maitred_store::{HotelStore, IdentityStore, NewIdentity};

use crate::error::ApiError;
use crate::guards::AuthContext;
use crate::state::AppState;

/// `GET /api/hotels/{hotel_id}/users` — sanitized, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(hotel_id): Path<String>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;

    let hotel_id = HotelId::new(hotel_id);
    state
        .hotels
        .hotel_by_id(&hotel_id)
        .await?
        .ok_or_else(|| Error::not_found("Hotel not found"))?;

    let users = state
        .identities
        .identities_for_hotel(&hotel_id)
        .await?
        .iter()
        .map(UserView::from)
        .collect();
    Ok(Json(users))
}

/// `POST /api/hotels/{hotel_id}/users` — create an ADMIN or MANAGER
/// bound to the hotel.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(hotel_id): Path<String>,
    Json(input): Json<CreateHotelUserInput>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    auth.require_role(&[Role::SuperAdmin])?;
    validate_input(&input)?;
    input.validate_role()?;

    let hotel_id = HotelId::new(hotel_id);
    state
        .hotels
        .hotel_by_id(&hotel_id)
        .await?
        .ok_or_else(|| Error::not_found("Hotel not found"))?;

    let password_hash = hash_password(&input.password, state.bcrypt_cost)?;
    let identity = state
        .identities
        .create_identity(NewIdentity {
            name: input.name,
            email: input.email,
            password_hash,
            role: input.role,
            hotel_id: Some(hotel_id),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserView::from(&identity))))
}
