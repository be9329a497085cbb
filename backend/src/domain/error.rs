//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them
//! to status codes and renders the wire envelope `{ "error": message,
//! "detail": ... }` that clients of this API rely on.

use serde::Serialize;
use serde_json::Value;

/// Stable machine-readable error code describing the failure category.
///
/// The code never appears in the response body; it only drives the HTTP
/// status mapping in the inbound adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The HTTP method is not supported on this resource.
    MethodNotAllowed,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Error payload rendered to API clients.
///
/// ## Invariants
/// - `message` is the user-facing `error` field and is never empty.
/// - `details`, when present, is the `detail` field and carries structured
///   context (offending codes, upstream failure text).
///
/// # Examples
/// ```
/// use flightscore::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Airport not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Error {
    #[serde(skip)]
    code: ErrorCode,
    #[serde(rename = "error")]
    message: String,
    #[serde(rename = "detail", skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message rendered as the `error` field.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary detail rendered as the `detail` field.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured detail to the error.
    ///
    /// # Examples
    /// ```
    /// use flightscore::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::not_found("Airport not found")
    ///     .with_details(json!({ "from": "LAX", "to": "XXX" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorCode::MethodNotAllowed, "Method not allowed")
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
