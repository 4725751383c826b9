//! Contract models for the survey service
//!
//! These models are transport-agnostic and used across the module layers.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A registered respondent
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// User identifier
    pub id: Uuid,
    /// Derived unique username (first name + surname initial, suffixed on collision)
    pub username: String,
    pub first_name: String,
    pub surname: String,
    /// Globally unique email address
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// Argon2id password hash
    pub password_hash: String,
    /// Last-known geolocation, if the client reported one
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Registration input before username derivation and password hashing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// Raw password (hashed with Argon2id before storage)
    pub password: String,
    pub confirm_password: String,
}

/// Demographics step response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographic {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Registered/legal name of the operation
    pub registered_name: String,
    /// Province code from the fixed hierarchy
    pub province: String,
    /// District/metropolitan municipality code
    pub district: String,
    /// Local municipality code
    pub municipality: String,
    /// Selected agricultural activity codes
    pub agricultural_activities: Vec<String>,
    /// Free text when "other" was selected
    pub other_agricultural_activity: Option<String>,
    /// Selected farm activity codes
    pub farm_activities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Area in hectares per tenure category for one land-use type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenureAreas {
    pub own: Decimal,
    /// Lease/rent from government
    pub govt: Decimal,
    /// Lease/rent from traditional administration
    pub traditional: Decimal,
    /// Lease/rent from other
    pub other: Decimal,
}

/// Main land-use survey response: five land-use types x four tenure categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandUseSurvey {
    pub id: Uuid,
    pub user_id: Uuid,
    pub crops: TenureAreas,
    pub pastures: TenureAreas,
    pub greenhouses: TenureAreas,
    pub natural_forest: TenureAreas,
    pub woodland: TenureAreas,
    pub created_at: DateTime<Utc>,
}

/// Horticultural detail step response, only reached on the farming fork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorticulturalDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub farming_practices: Vec<String>,
    pub water_supplies: Vec<String>,
    pub irrigation_systems: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Screening step answers. Not persisted; they only decide routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningAnswers {
    pub province: String,
    pub is_farmer: String,
}

/// Demographics step submission before persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicSubmission {
    pub registered_name: String,
    pub province: String,
    pub district: String,
    pub municipality: String,
    pub agricultural_activities: Vec<String>,
    pub other_agricultural_activity: Option<String>,
    pub farm_activities: Vec<String>,
}

/// Land-use step submission; absent areas arrive as zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandUseSubmission {
    pub crops: TenureAreas,
    pub pastures: TenureAreas,
    pub greenhouses: TenureAreas,
    pub natural_forest: TenureAreas,
    pub woodland: TenureAreas,
}

/// Horticultural detail step submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HorticulturalSubmission {
    pub farming_practices: Vec<String>,
    pub water_supplies: Vec<String>,
    pub irrigation_systems: Vec<String>,
}

/// Steps of the survey flow, including the terminal states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyStep {
    Screening,
    Demographics,
    LandUse,
    HorticulturalDetail,
    ThankYou,
    /// Terminal state for respondents outside the target population
    NotTargeted,
    /// Unconditional exit when no surveyed activity was selected
    Home,
}

impl SurveyStep {
    /// Stable machine-readable name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Screening => "screening",
            Self::Demographics => "demographics",
            Self::LandUse => "land_use",
            Self::HorticulturalDetail => "horticultural_detail",
            Self::ThankYou => "thank_you",
            Self::NotTargeted => "not_targeted",
            Self::Home => "home",
        }
    }
}
