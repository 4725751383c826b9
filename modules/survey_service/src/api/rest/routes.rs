//! Route registration

use crate::domain::Service;
use super::{dto::*, handlers};
use axum::{
    http::{HeaderMap, StatusCode},
    routing::{post, put},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Build the router with all survey endpoints
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        // Account endpoints
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
        // OTP endpoints
        .route("/auth/otp/send", post(send_otp_handler))
        .route("/auth/otp/verify", post(verify_otp_handler))
        // Authenticated profile endpoint
        .route("/me/location", put(update_location_handler))
        // Survey step endpoints
        .route("/survey/screening", post(screening_handler))
        .route("/survey/demographics", post(demographics_handler))
        .route("/survey/land-use", post(land_use_handler))
        .route(
            "/survey/horticultural-detail",
            post(horticultural_detail_handler),
        )
        .layer(Extension(service))
}

// ===== Handler wrappers that extract the service from Extension =====

async fn register_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserDto>), super::error::Problem> {
    handlers::register(service, json).await
}

async fn login_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<LoginRequest>,
) -> Result<Json<LoginResponse>, super::error::Problem> {
    handlers::login(service, json).await
}

async fn logout_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
) -> Result<StatusCode, super::error::Problem> {
    handlers::logout(service, headers).await
}

async fn send_otp_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, super::error::Problem> {
    handlers::send_otp(service, headers, json).await
}

async fn verify_otp_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<VerifyOtpRequest>,
) -> Result<StatusCode, super::error::Problem> {
    handlers::verify_otp(service, headers, json).await
}

async fn update_location_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<LocationRequest>,
) -> Result<StatusCode, super::error::Problem> {
    handlers::update_location(service, headers, json).await
}

async fn screening_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<ScreeningRequest>,
) -> Result<Json<NextStepResponse>, super::error::Problem> {
    handlers::submit_screening(service, headers, json).await
}

async fn demographics_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<DemographicRequest>,
) -> Result<Json<NextStepResponse>, super::error::Problem> {
    handlers::submit_demographics(service, headers, json).await
}

async fn land_use_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<LandUseRequest>,
) -> Result<Json<NextStepResponse>, super::error::Problem> {
    handlers::submit_land_use(service, headers, json).await
}

async fn horticultural_detail_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<HorticulturalRequest>,
) -> Result<Json<NextStepResponse>, super::error::Problem> {
    handlers::submit_horticultural_detail(service, headers, json).await
}
