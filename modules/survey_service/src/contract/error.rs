//! Contract error types for the survey service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! Problem Details responses.

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Survey service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// One or more fields failed validation; the request should be redisplayed
    Validation {
        /// Per-field failures
        errors: Vec<FieldError>,
    },
    /// Uniqueness conflict (duplicate email or username)
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// Bad email/password combination. Deliberately does not distinguish an
    /// unknown email from a wrong password (no account enumeration).
    InvalidCredentials,
    /// The request carried no valid session, or the session is not logged in
    Unauthenticated,
    /// The pending one-time code passed its validity window; re-issue required
    OtpExpired,
    /// The submitted one-time code did not match; the pending code stays valid
    OtpMismatch,
    /// Resource not found
    NotFound {
        /// Resource type
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Internal error
    Internal,
}

impl SurveyError {
    /// Convenience constructor for a single-field validation failure
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { errors } => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
            Self::Conflict { reason } => {
                write!(f, "Conflict: {}", reason)
            }
            Self::InvalidCredentials => {
                write!(f, "Invalid email or password")
            }
            Self::Unauthenticated => {
                write!(f, "Authentication required")
            }
            Self::OtpExpired => {
                write!(f, "One-time code has expired")
            }
            Self::OtpMismatch => {
                write!(f, "One-time code does not match")
            }
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for SurveyError {}
