//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::SurveyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Field-level error as serialized in the Problem extension
#[derive(Debug, Serialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Per-field validation failures (extension member)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorDto>>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            errors: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add per-field errors
    pub fn with_errors(mut self, errors: Vec<FieldErrorDto>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SurveyError) -> Problem {
    match error {
        SurveyError::Validation { errors } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
        )
        .with_detail("One or more fields failed validation")
        .with_errors(
            errors
                .into_iter()
                .map(|e| FieldErrorDto {
                    field: e.field,
                    message: e.message,
                })
                .collect(),
        ),

        SurveyError::Conflict { reason } => {
            Problem::new(StatusCode::CONFLICT, "Conflict").with_detail(reason)
        }

        SurveyError::InvalidCredentials => Problem::new(
            StatusCode::UNAUTHORIZED,
            "Invalid Credentials",
        )
        .with_detail("Login unsuccessful. Please check email and password"),

        SurveyError::Unauthenticated => Problem::new(
            StatusCode::UNAUTHORIZED,
            "Authentication Required",
        )
        .with_detail("A valid session token is required"),

        SurveyError::OtpExpired => Problem::new(StatusCode::GONE, "Code Expired")
            .with_detail("The one-time code has expired. Please request a new one"),

        SurveyError::OtpMismatch => Problem::new(StatusCode::BAD_REQUEST, "Code Mismatch")
            .with_detail("Invalid one-time code. Please try again"),

        SurveyError::NotFound { resource, id } => Problem::new(
            StatusCode::NOT_FOUND,
            format!("{} Not Found", resource),
        )
        .with_detail(format!("{} with id '{}' was not found", resource, id)),

        SurveyError::Internal => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("An unexpected error occurred"),
    }
}
