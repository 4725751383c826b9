//! HTTP request handlers - thin layer that delegates to the domain service

use crate::contract::SurveyError;
use crate::domain::Service;
use super::{dto::*, error::{map_domain_error, Problem}};
use axum::{
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

/// Extract the bearer token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn require_token(headers: &HeaderMap) -> Result<&str, Problem> {
    bearer_token(headers).ok_or_else(|| map_domain_error(SurveyError::Unauthenticated))
}

// ===== Account Handlers =====

/// Register a new respondent
pub async fn register(
    service: Arc<Service>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserDto>), Problem> {
    let declaration = req.declaration.clone();
    let user = service
        .register(req.into(), &declaration)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Log in and open a session
pub async fn login(
    service: Arc<Service>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Problem> {
    let (token, user) = service
        .login(&req.email, &req.password)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// Drop the caller's session
pub async fn logout(service: Arc<Service>, headers: HeaderMap) -> Result<StatusCode, Problem> {
    let token = require_token(&headers)?;
    service.logout(token);
    Ok(StatusCode::NO_CONTENT)
}

/// Overwrite the caller's last-known coordinates
pub async fn update_location(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<LocationRequest>,
) -> Result<StatusCode, Problem> {
    let token = require_token(&headers)?;
    service
        .record_location(token, req.latitude, req.longitude)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== OTP Handlers =====

/// Issue a one-time code to an email address. Works without a session; the
/// returned token identifies the session holding the pending code.
pub async fn send_otp(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, Problem> {
    let token = service
        .send_otp(bearer_token(&headers), &req.email)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SendOtpResponse { token }))
}

/// Verify a submitted one-time code
pub async fn verify_otp(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<StatusCode, Problem> {
    let token = require_token(&headers)?;
    service.verify_otp(token, &req.otp).map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Survey Step Handlers =====

/// Screening step; answers decide routing and are not persisted
pub async fn submit_screening(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<ScreeningRequest>,
) -> Result<Json<NextStepResponse>, Problem> {
    let token = require_token(&headers)?;
    let next = service
        .submit_screening(token, req.into())
        .map_err(map_domain_error)?;

    Ok(Json(next.into()))
}

/// Demographics step
pub async fn submit_demographics(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<DemographicRequest>,
) -> Result<Json<NextStepResponse>, Problem> {
    let token = require_token(&headers)?;
    let next = service
        .submit_demographics(token, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(next.into()))
}

/// Main land-use survey step
pub async fn submit_land_use(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<LandUseRequest>,
) -> Result<Json<NextStepResponse>, Problem> {
    let token = require_token(&headers)?;
    let next = service
        .submit_land_use(token, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(next.into()))
}

/// Horticultural detail step
pub async fn submit_horticultural_detail(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<HorticulturalRequest>,
) -> Result<Json<NextStepResponse>, Problem> {
    let token = require_token(&headers)?;
    let next = service
        .submit_horticultural_detail(token, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(next.into()))
}
