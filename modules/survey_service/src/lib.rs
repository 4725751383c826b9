//! Survey Service Module
//!
//! Multi-step agricultural survey flow: registration, authentication,
//! one-time-code email verification, and a conditional sequence of
//! questionnaire steps with per-user append-only persistence.

// Public exports
pub mod contract;
pub use contract::{
    Demographic, DemographicSubmission, FieldError, HorticulturalDetail, HorticulturalSubmission,
    LandUseSubmission, LandUseSurvey, Registration, ScreeningAnswers, SurveyError, SurveyStep,
    TenureAreas, User,
};

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
