//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Account DTOs =====

/// Registration request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub first_name: String,
    pub surname: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
    /// Must be "agree"
    #[serde(default)]
    pub declaration: String,
}

/// Public view of a user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    /// Derived unique username
    #[schema(example = "johns")]
    pub username: String,
    pub first_name: String,
    pub surname: String,
    pub email: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response carrying the session bearer token
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

/// Location update request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LocationRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ===== OTP DTOs =====

/// One-time code issue request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendOtpRequest {
    pub email: String,
}

/// One-time code issue response. The token identifies the session holding
/// the pending code; reuse it for verification.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SendOtpResponse {
    pub token: String,
}

/// One-time code verification request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    pub otp: String,
}

// ===== Survey Step DTOs =====

/// Screening step request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ScreeningRequest {
    #[schema(example = "Western Cape")]
    pub province: String,
    pub is_farmer: String,
}

/// Demographics step request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DemographicRequest {
    pub registered_name: String,
    #[schema(example = "wc")]
    pub province: String,
    #[schema(example = "cape_winelands")]
    pub district: String,
    #[schema(example = "stellenbosch")]
    pub municipality: String,
    #[serde(default)]
    pub agricultural_activity: Vec<String>,
    #[serde(default)]
    pub other_agricultural_activity: Option<String>,
    #[serde(default)]
    pub farm_activity: Vec<String>,
}

/// Areas in hectares per tenure category; omitted values default to zero
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct TenureAreasDto {
    #[serde(default)]
    pub own: Decimal,
    #[serde(default)]
    pub govt: Decimal,
    #[serde(default)]
    pub traditional: Decimal,
    #[serde(default)]
    pub other: Decimal,
}

/// Land-use step request; omitted groups default to all-zero
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LandUseRequest {
    #[serde(default)]
    pub crops: TenureAreasDto,
    #[serde(default)]
    pub pastures: TenureAreasDto,
    #[serde(default)]
    pub greenhouses: TenureAreasDto,
    #[serde(default)]
    pub natural_forest: TenureAreasDto,
    #[serde(default)]
    pub woodland: TenureAreasDto,
}

/// Horticultural detail step request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct HorticulturalRequest {
    #[serde(default)]
    pub farming_practice: Vec<String>,
    #[serde(default)]
    pub water_supply: Vec<String>,
    #[serde(default)]
    pub irrigation_system: Vec<String>,
}

/// Step submission response telling the client where to go next
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NextStepResponse {
    /// Machine-readable next step name
    #[schema(example = "demographics")]
    pub next_step: String,
}
