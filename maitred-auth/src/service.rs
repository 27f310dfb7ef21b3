// Credential sign-in service.

use std::sync::Arc;

use async_trait::async_trait;
use maitred_core::{Error, Identity, Result};
use tracing::debug;

use crate::options::AuthOptions;
use crate::password::verify_password;
use crate::token::{Claims, TokenCodec};

/// Storage seam for looking up identities by email.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn identity_by_email(&self, email: &str) -> Result<Option<Identity>>;
}

/// A successful sign-in: the minted access token plus the identity it
/// was minted from.
#[derive(Debug, Clone)]
pub struct SignIn {
    pub token: String,
    pub identity: Identity,
}

/// Authenticates credential pairs and verifies session tokens.
///
/// Unknown email and bad password are indistinguishable to the caller;
/// a deactivated account is the one user-actionable failure and gets a
/// distinct message.
pub struct AuthService {
    resolver: Arc<dyn IdentityResolver>,
    codec: TokenCodec,
}

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const DEACTIVATED: &str = "Account is deactivated. Contact your administrator.";

impl AuthService {
    pub fn new(resolver: Arc<dyn IdentityResolver>, options: AuthOptions) -> Self {
        Self {
            resolver,
            codec: TokenCodec::new(options),
        }
    }

    /// Verify a credential pair and mint a session token.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<SignIn> {
        let identity = self
            .resolver
            .identity_by_email(email)
            .await?
            .ok_or_else(|| Error::not_authenticated(INVALID_CREDENTIALS))?;

        if !identity.is_active {
            debug!(identity_id = %identity.id, "sign-in rejected: deactivated account");
            return Err(Error::forbidden(DEACTIVATED));
        }

        if !verify_password(password, &identity.password_hash)? {
            debug!(identity_id = %identity.id, "sign-in rejected: bad credentials");
            return Err(Error::not_authenticated(INVALID_CREDENTIALS));
        }

        let token = self.mint(&identity)?;
        Ok(SignIn { token, identity })
    }

    /// Mint a session token from an identity record.
    pub fn mint(&self, identity: &Identity) -> Result<String> {
        self.codec
            .sign(&identity.id, identity.role, identity.hotel_id.clone())
    }

    /// Verify a session token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        self.codec.verify(token)
    }
}
