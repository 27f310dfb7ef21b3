//! maitred-auth: credential verification and session tokens.
//!
//! The identity provider boundary: bcrypt password checks, HS256 session
//! tokens carrying the `{identity, role, hotel}` claim set, and the
//! sign-in service. Storage is reached through the [`IdentityResolver`]
//! seam so this crate stays persistence-agnostic.

pub mod options;
pub mod password;
pub mod service;
pub mod token;

pub use options::AuthOptions;
pub use password::{hash_password, verify_password};
pub use service::{AuthService, IdentityResolver, SignIn};
pub use token::{parse_bearer, Claims, TokenCodec};
