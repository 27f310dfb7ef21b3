//! # Errors
//!
//! maitred uses a single structured error type across all crates:
//! - consistent status codes + class names
//! - optional structured `data` / `errors` payloads (e.g. the premium
//!   upgrade prompt carries the blocked feature and the required plan)
//! - transport-agnostic (the server crate decides how to serialize)
//!
//! Authorization failures are terminal for a request and deliberately
//! uninformative, except where a payload is part of the contract.

use std::fmt;

use serde_json::Value;

/// A convenience result type for maitred core APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Error classes and their HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,       // 400
    NotAuthenticated, // 401
    Forbidden,        // 403
    NotFound,         // 404
    Conflict,         // 409
    Unprocessable,    // 422
    GeneralError,     // 500
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotAuthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Unprocessable => 422,
            ErrorKind::GeneralError => 500,
        }
    }

    /// Error `name` (e.g. "NotFound")
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotAuthenticated => "NotAuthenticated",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unprocessable => "Unprocessable",
            ErrorKind::GeneralError => "GeneralError",
        }
    }

    /// Error `className` (kebab-cased)
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad-request",
            ErrorKind::NotAuthenticated => "not-authenticated",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not-found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::GeneralError => "general-error",
        }
    }
}

/// A structured maitred error.
///
/// Fields:
/// - kind (maps to status code, name, class_name)
/// - message
/// - data (optional, part of the client contract)
/// - errors (optional, per-field validation detail)
#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub data: Option<Value>,
    pub errors: Option<Value>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_errors(mut self, errors: Value) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// A version safe to return to clients: internal (500-class) detail is
    /// replaced by a generic message. Everything else is part of the
    /// contract and passes through.
    pub fn sanitize_for_client(&self) -> Error {
        if self.kind == ErrorKind::GeneralError {
            return Error::new(ErrorKind::GeneralError, "Internal server error");
        }
        self.clone()
    }

    /// Client-facing JSON payload.
    pub fn to_json(&self) -> Value {
        use serde_json::json;

        let mut base = json!({
            "name": self.name(),
            "message": self.message,
            "code": self.code(),
            "className": self.class_name(),
        });

        if let Some(d) = &self.data {
            base["data"] = d.clone();
        }
        if let Some(e) = &self.errors {
            base["errors"] = e.clone();
        }
        base
    }

    // ---- Constructors ----

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, msg)
    }
    pub fn not_authenticated(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthenticated, msg)
    }
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, msg)
    }
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unprocessable, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_shape_carries_data_and_errors() {
        let err = Error::forbidden("This feature requires a Premium plan")
            .with_data(json!({"feature": "inventory", "requiredPlan": "PREMIUM"}));

        let body = err.to_json();
        assert_eq!(body["name"], "Forbidden");
        assert_eq!(body["code"], 403);
        assert_eq!(body["className"], "forbidden");
        assert_eq!(body["data"]["requiredPlan"], "PREMIUM");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn sanitize_hides_internal_detail() {
        let err = Error::general_error("connection pool exhausted: secret-host:5432");
        let safe = err.sanitize_for_client();
        assert_eq!(safe.message, "Internal server error");
        assert_eq!(safe.code(), 500);

        // Non-internal errors pass through untouched.
        let err = Error::conflict("A hotel with this slug already exists");
        assert_eq!(err.sanitize_for_client().message, err.message);
    }
}
