// First-boot seeding.

use maitred_auth::hash_password;
use maitred_core::{Error, Result, Role};
use maitred_store::{IdentityStore, NewIdentity};
use tracing::info;

use crate::state::AppState;

/// Ensure the platform account exists. Idempotent: a second boot with
/// the same email is a no-op.
pub async fn seed_super_admin(state: &AppState, email: &str, password: &str) -> Result<()> {
    if state
        .identities
        .identity_by_email(email)
        .await
        .map_err(Error::from)?
        .is_some()
    {
        info!(email, "platform account already present, skipping seed");
        return Ok(());
    }

    let password_hash = hash_password(password, state.bcrypt_cost)?;
    let identity = state
        .identities
        .create_identity(NewIdentity {
            name: "Platform Admin".to_string(),
            email: email.to_string(),
            password_hash,
            role: Role::SuperAdmin,
            hotel_id: None,
        })
        .await
        .map_err(Error::from)?;

    info!(identity_id = %identity.id, email, "seeded platform account");
    Ok(())
}
