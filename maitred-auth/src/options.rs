// Authentication options and configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Authentication configuration.
///
/// Durations deserialize from humane strings (e.g. `"24h"`, `"15m"`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthOptions {
    /// HMAC secret for signing session tokens.
    pub secret: String,
    /// JWT `iss` claim.
    pub issuer: String,
    /// JWT `aud` claim.
    pub audience: Vec<String>,
    /// Access token lifetime.
    #[serde(with = "humantime_serde")]
    pub access_token_expires_in: Duration,
    /// bcrypt cost factor for newly hashed credentials.
    pub bcrypt_cost: u32,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            secret: "maitred-dev-secret".to_string(),
            issuer: "maitred".to_string(),
            audience: vec!["https://maitred.dev".to_string()],
            access_token_expires_in: Duration::from_secs(60 * 60 * 24),
            bcrypt_cost: 12,
        }
    }
}

impl AuthOptions {
    /// Startup check; the server refuses to boot with a config that
    /// could not mint or verify a token.
    pub fn validate(&self) -> Result<(), String> {
        if self.secret.trim().is_empty() {
            return Err("JWT secret must not be empty".to_string());
        }
        if self.issuer.trim().is_empty() {
            return Err("JWT issuer must not be empty".to_string());
        }
        if self.audience.is_empty() {
            return Err("At least one JWT audience must be configured".to_string());
        }
        Ok(())
    }
}
