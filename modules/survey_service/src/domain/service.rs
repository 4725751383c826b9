//! Domain service - business logic orchestration

use crate::config::Config;
use crate::contract::{
    Demographic, DemographicSubmission, FieldError, HorticulturalDetail, HorticulturalSubmission,
    LandUseSubmission, LandUseSurvey, Registration, ScreeningAnswers, SurveyError, SurveyStep,
    User,
};
use super::mailer::MailSender;
use super::navigator;
use super::otp::{OtpOutcome, OtpVerifier};
use super::repository::{InsertError, ResponseRepository, UserRepository};
use super::session::SessionStore;
use super::validation;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for the survey flow
pub struct Service {
    user_repo: Arc<dyn UserRepository>,
    response_repo: Arc<dyn ResponseRepository>,
    mailer: Arc<dyn MailSender>,
    sessions: SessionStore,
    otp: OtpVerifier,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        response_repo: Arc<dyn ResponseRepository>,
        mailer: Arc<dyn MailSender>,
        config: Config,
    ) -> Self {
        let otp = OtpVerifier::new(
            config.otp_length,
            Duration::minutes(config.otp_validity_minutes),
        );
        let sessions = SessionStore::new(Duration::minutes(config.session_ttl_minutes));
        Self {
            user_repo,
            response_repo,
            mailer,
            sessions,
            otp,
            config,
        }
    }

    /// Session store accessor for the REST layer and tests
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    // ===== Account Operations =====

    /// Register a new respondent.
    ///
    /// The derived username is probed for uniqueness with an incrementing
    /// suffix. The probe is best-effort; the unique constraint in the store
    /// is the real enforcement, so a violation on insert is retried with the
    /// next suffix.
    pub async fn register(
        &self,
        registration: Registration,
        declaration: &str,
    ) -> Result<User, SurveyError> {
        validation::validate_registration(&registration, declaration)?;

        if self
            .user_repo
            .find_by_email(&registration.email)
            .await
            .map_err(|_| SurveyError::Internal)?
            .is_some()
        {
            return Err(SurveyError::Conflict {
                reason: "An account with this email already exists".to_string(),
            });
        }

        let password_hash = hash_password(&registration.password)?;
        let base = derive_username_base(&registration.first_name, &registration.surname);

        let mut counter: u32 = 0;
        loop {
            let candidate = if counter == 0 {
                base.clone()
            } else {
                format!("{}{}", base, counter)
            };

            if counter >= self.config.username_probe_limit {
                return Err(SurveyError::Conflict {
                    reason: format!("Could not derive a unique username from '{}'", base),
                });
            }

            if self
                .user_repo
                .find_by_username(&candidate)
                .await
                .map_err(|_| SurveyError::Internal)?
                .is_some()
            {
                counter += 1;
                continue;
            }

            let user = User {
                id: Uuid::new_v4(),
                username: candidate,
                first_name: registration.first_name.clone(),
                surname: registration.surname.clone(),
                email: registration.email.clone(),
                phone_number: registration.phone_number.clone(),
                address: registration.address.clone(),
                password_hash: password_hash.clone(),
                latitude: None,
                longitude: None,
                created_at: chrono::Utc::now(),
            };

            match self.user_repo.create(&user).await {
                Ok(created) => {
                    tracing::info!(username = %created.username, "account created");
                    return Ok(created);
                }
                Err(InsertError::UniqueViolation(constraint))
                    if constraint.contains("email") =>
                {
                    // Lost a race on the email constraint after the pre-check
                    return Err(SurveyError::Conflict {
                        reason: "An account with this email already exists".to_string(),
                    });
                }
                Err(InsertError::UniqueViolation(_)) => {
                    // Concurrent registration took the candidate between the
                    // probe and the insert; try the next suffix
                    counter += 1;
                }
                Err(InsertError::Other(err)) => {
                    tracing::error!(error = %err, "user insert failed");
                    return Err(SurveyError::Internal);
                }
            }
        }
    }

    /// Authenticate by email and password, returning a fresh session token.
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), SurveyError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(|_| SurveyError::Internal)?
            .ok_or(SurveyError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, password) {
            return Err(SurveyError::InvalidCredentials);
        }

        let token = self.sessions.create();
        self.sessions
            .with_context(&token, |ctx| ctx.user_id = Some(user.id));
        Ok((token, user))
    }

    /// Drop the session for a token
    pub fn logout(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Overwrite the caller's last-known coordinates
    pub async fn record_location(
        &self,
        token: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(), SurveyError> {
        let user_id = self.require_user(token)?;

        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            let mut errors = Vec::new();
            if latitude.is_none() {
                errors.push(FieldError::new("latitude", "This field is required"));
            }
            if longitude.is_none() {
                errors.push(FieldError::new("longitude", "This field is required"));
            }
            return Err(SurveyError::Validation { errors });
        };

        self.user_repo
            .update_location(user_id, latitude, longitude)
            .await
            .map_err(|_| SurveyError::Internal)
    }

    // ===== OTP Operations =====

    /// Issue a one-time code to an email address, stored against the caller's
    /// session. Without a token a fresh anonymous session is created; the
    /// (possibly new) token is returned. Dispatch is fire-and-forget.
    pub async fn send_otp(
        &self,
        token: Option<&str>,
        email: &str,
    ) -> Result<String, SurveyError> {
        if email.trim().is_empty() {
            return Err(SurveyError::invalid_field("email", "This field is required"));
        }

        let token = match token {
            Some(t) if self.sessions.get(t).is_some() => t.to_string(),
            _ => self.sessions.create(),
        };

        let code = self
            .sessions
            .with_context(&token, |ctx| self.otp.issue(ctx))
            .ok_or(SurveyError::Internal)?;

        let body = format!(
            "Your one-time code is: {}\n\nThis code is valid for {} minutes.",
            code, self.config.otp_validity_minutes
        );
        if let Err(err) = self
            .mailer
            .send(email, "Your verification code", &body)
            .await
        {
            tracing::warn!(error = %err, "failed to dispatch one-time code");
        }

        Ok(token)
    }

    /// Verify a submitted one-time code against the session's pending code
    pub fn verify_otp(&self, token: &str, submitted: &str) -> Result<(), SurveyError> {
        let outcome = self
            .sessions
            .with_context(token, |ctx| self.otp.verify(ctx, submitted))
            .ok_or(SurveyError::Unauthenticated)?;

        match outcome {
            OtpOutcome::Verified => Ok(()),
            OtpOutcome::Expired => Err(SurveyError::OtpExpired),
            OtpOutcome::Mismatch => Err(SurveyError::OtpMismatch),
        }
    }

    // ===== Survey Steps =====

    /// Screening step: routes into the survey or out to the not-targeted
    /// terminal. Answers are not persisted.
    pub fn submit_screening(
        &self,
        token: &str,
        answers: ScreeningAnswers,
    ) -> Result<SurveyStep, SurveyError> {
        self.require_user(token)?;
        validation::validate_screening(&answers)?;
        Ok(navigator::after_screening(
            &answers.province,
            &self.config.target_province,
        ))
    }

    /// Demographics step: persists the response and records the fork flag
    /// in the session when a fork branch is taken.
    pub async fn submit_demographics(
        &self,
        token: &str,
        submission: DemographicSubmission,
    ) -> Result<SurveyStep, SurveyError> {
        let user_id = self.require_user(token)?;
        validation::validate_demographics(&submission)?;

        let demographic = Demographic {
            id: Uuid::new_v4(),
            user_id,
            registered_name: submission.registered_name,
            province: submission.province,
            district: submission.district,
            municipality: submission.municipality,
            agricultural_activities: submission.agricultural_activities,
            other_agricultural_activity: submission.other_agricultural_activity,
            farm_activities: submission.farm_activities,
            created_at: chrono::Utc::now(),
        };

        self.response_repo
            .insert_demographic(&demographic)
            .await
            .map_err(|_| SurveyError::Internal)?;

        let (next, flag) = navigator::after_demographics(&demographic.agricultural_activities);
        if let Some(flag) = flag {
            self.sessions
                .with_context(token, |ctx| ctx.farming_selected = Some(flag));
        }
        Ok(next)
    }

    /// Land-use step: persists the twenty area values (absent ones as zero)
    /// and forks on the session flag.
    pub async fn submit_land_use(
        &self,
        token: &str,
        submission: LandUseSubmission,
    ) -> Result<SurveyStep, SurveyError> {
        let user_id = self.require_user(token)?;

        let survey = LandUseSurvey {
            id: Uuid::new_v4(),
            user_id,
            crops: submission.crops,
            pastures: submission.pastures,
            greenhouses: submission.greenhouses,
            natural_forest: submission.natural_forest,
            woodland: submission.woodland,
            created_at: chrono::Utc::now(),
        };

        self.response_repo
            .insert_land_use(&survey)
            .await
            .map_err(|_| SurveyError::Internal)?;

        // The flag stays in the session after being read
        let farming_selected = self
            .sessions
            .get(token)
            .and_then(|ctx| ctx.farming_selected)
            .unwrap_or(false);
        Ok(navigator::after_land_use(farming_selected))
    }

    /// Horticultural detail step, only reached on the farming fork
    pub async fn submit_horticultural_detail(
        &self,
        token: &str,
        submission: HorticulturalSubmission,
    ) -> Result<SurveyStep, SurveyError> {
        let user_id = self.require_user(token)?;
        validation::validate_horticultural_detail(&submission)?;

        let detail = HorticulturalDetail {
            id: Uuid::new_v4(),
            user_id,
            farming_practices: submission.farming_practices,
            water_supplies: submission.water_supplies,
            irrigation_systems: submission.irrigation_systems,
            created_at: chrono::Utc::now(),
        };

        self.response_repo
            .insert_horticultural_detail(&detail)
            .await
            .map_err(|_| SurveyError::Internal)?;

        Ok(navigator::after_horticultural_detail())
    }

    // ===== Helper Methods =====

    fn require_user(&self, token: &str) -> Result<Uuid, SurveyError> {
        self.sessions
            .authenticated_user(token)
            .ok_or(SurveyError::Unauthenticated)
    }
}

/// Lowercased first name + lowercased surname initial
fn derive_username_base(first_name: &str, surname: &str) -> String {
    let initial: String = surname
        .trim()
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default();
    format!("{}{}", first_name.trim().to_lowercase(), initial)
}

fn hash_password(password: &str) -> Result<String, SurveyError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| SurveyError::Internal)
}

fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHash::new(hash)
        .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::derive_username_base;

    #[test]
    fn username_base_is_lowercased_name_plus_initial() {
        assert_eq!(derive_username_base("John", "Smith"), "johns");
        assert_eq!(derive_username_base("MARIE", "van Wyk"), "mariev");
        assert_eq!(derive_username_base(" Thabo ", " Nkosi"), "thabon");
    }
}
