// Sign-in.

use axum::{extract::State, Json};
use maitred_core::UserView;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInBody {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/sign-in`
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInBody>,
) -> Result<Json<Value>, ApiError> {
    let signed = state.auth.authenticate(&body.email, &body.password).await?;
    Ok(Json(json!({
        "token": signed.token,
        "user": UserView::from(&signed.identity),
    })))
}
