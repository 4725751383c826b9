//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Demographic, HorticulturalDetail, LandUseSurvey, User};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Failure modes of an insert that the service must tell apart.
///
/// Constraint violations are not pre-checkable reliably (the uniqueness probe
/// during registration is best-effort); the store surfaces them explicitly so
/// callers can map them to a conflict instead of an opaque failure.
#[derive(Debug)]
pub enum InsertError {
    /// A unique constraint rejected the row
    UniqueViolation(String),
    /// Any other storage failure
    Other(anyhow::Error),
}

impl std::fmt::Display for InsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UniqueViolation(constraint) => {
                write!(f, "unique constraint violation: {}", constraint)
            }
            Self::Other(err) => write!(f, "storage error: {}", err),
        }
    }
}

impl std::error::Error for InsertError {}

/// Repository for user records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: &User) -> Result<User, InsertError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Overwrite the user's last-known coordinates
    async fn update_location(&self, id: Uuid, latitude: f64, longitude: f64) -> Result<()>;
}

/// Repository for survey step responses. All three record types are
/// append-only and write-only: nothing in the flow reads a submission back.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Persist a demographics response
    async fn insert_demographic(&self, demographic: &Demographic) -> Result<Demographic>;

    /// Persist a land-use survey response
    async fn insert_land_use(&self, survey: &LandUseSurvey) -> Result<LandUseSurvey>;

    /// Persist a horticultural detail response
    async fn insert_horticultural_detail(
        &self,
        detail: &HorticulturalDetail,
    ) -> Result<HorticulturalDetail>;
}
