//! Contract layer - public API of the survey service
//!
//! This layer contains transport-agnostic models and the error taxonomy.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::{FieldError, SurveyError};
pub use model::{
    Demographic, DemographicSubmission, HorticulturalDetail, HorticulturalSubmission,
    LandUseSubmission, LandUseSurvey, Registration, ScreeningAnswers, SurveyStep, TenureAreas,
    User,
};
