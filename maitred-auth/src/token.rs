// Session tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use maitred_core::{Error, HotelId, Result, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::options::AuthOptions;

/// The session claim set minted at sign-in and carried on every request.
///
/// Re-derived from the identity record at mint time; role or hotel
/// changes take effect on next sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identity id.
    pub sub: String,
    pub role: Role,
    pub hotel_id: Option<HotelId>,
    pub iss: String,
    pub aud: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Signs and verifies session tokens (HS256 over a shared secret).
#[derive(Clone)]
pub struct TokenCodec {
    options: AuthOptions,
}

impl TokenCodec {
    pub fn new(options: AuthOptions) -> Self {
        Self { options }
    }

    /// Mint an access token for the given identity claims.
    pub fn sign(&self, identity_id: &str, role: Role, hotel_id: Option<HotelId>) -> Result<String> {
        let now = Utc::now().timestamp();
        let exp = now + self.options.access_token_expires_in.as_secs() as i64;

        let claims = Claims {
            sub: identity_id.to_string(),
            role,
            hotel_id,
            iss: self.options.issuer.clone(),
            aud: self.options.audience.clone(),
            iat: now,
            exp,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.options.secret.as_bytes()),
        )
        .map_err(|e| Error::not_authenticated(e.to_string()))
    }

    /// Verify signature, expiry, issuer, and audience; return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.options.issuer.as_str()]);
        validation.set_audience(
            &self
                .options
                .audience
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>(),
        );

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.options.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| Error::not_authenticated(e.to_string()))?;

        Ok(decoded.claims)
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// Accepts `Bearer <token>` (case-insensitive scheme) or a bare token.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let v = header_value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some((scheme, token)) = v.split_once(' ') {
        let token = token.trim();
        if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
            return Some(token);
        }
        return None;
    }

    Some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(AuthOptions {
            secret: "test-secret".to_string(),
            ..AuthOptions::default()
        })
    }

    #[test]
    fn sign_and_verify_claims() {
        let codec = codec();
        let token = codec
            .sign("user-1", Role::Admin, Some(HotelId::new("hotel-1")))
            .unwrap();

        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.hotel_id, Some(HotelId::new("hotel-1")));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn super_admin_claims_carry_no_hotel() {
        let codec = codec();
        let token = codec.sign("root", Role::SuperAdmin, None).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.hotel_id, None);
        assert!(claims.role.is_super_admin());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let codec = codec();
        let token = codec.sign("user-1", Role::Manager, None).unwrap();

        let other = TokenCodec::new(AuthOptions {
            secret: "other-secret".to_string(),
            ..AuthOptions::default()
        });
        let err = other.verify(&token).unwrap_err();
        assert_eq!(err.code(), 401);
    }

    #[test]
    fn bearer_parsing() {
        assert_eq!(parse_bearer("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer("abc"), Some("abc"));
        assert_eq!(parse_bearer("Basic abc"), None);
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer(""), None);
    }
}
