//! Common test utilities: in-memory repositories, a recording mail sender,
//! and fixture builders

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use survey_service::contract::{
    Demographic, HorticulturalDetail, LandUseSurvey, Registration, User,
};
use survey_service::domain::repository::{InsertError, ResponseRepository, UserRepository};
use survey_service::domain::{MailSender, Service};
use survey_service::Config;
use uuid::Uuid;

// ===== Mock User Repository =====

#[derive(Default)]
pub struct MockUserRepo {
    users: RwLock<HashMap<Uuid, User>>,
    /// Usernames the unique index rejects even though the probe cannot see
    /// them: simulates a concurrent registration landing between the probe
    /// and the insert
    reserved_usernames: RwLock<HashSet<String>>,
}

impl MockUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the unique index reject a username without the probe seeing it
    pub fn reserve_username(&self, username: &str) {
        self.reserved_usernames.write().insert(username.to_string());
    }

    pub fn count(&self) -> usize {
        self.users.read().len()
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.read().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for MockUserRepo {
    async fn create(&self, user: &User) -> Result<User, InsertError> {
        if self.reserved_usernames.read().contains(&user.username) {
            return Err(InsertError::UniqueViolation(
                "idx_users_username".to_string(),
            ));
        }

        let mut users = self.users.write();
        if users.values().any(|u| u.username == user.username) {
            return Err(InsertError::UniqueViolation(
                "idx_users_username".to_string(),
            ));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(InsertError::UniqueViolation("idx_users_email".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update_location(
        &self,
        id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<()> {
        if let Some(user) = self.users.write().get_mut(&id) {
            user.latitude = Some(latitude);
            user.longitude = Some(longitude);
        }
        Ok(())
    }
}

// ===== Mock Response Repository =====

#[derive(Default)]
pub struct MockResponseRepo {
    demographics: RwLock<Vec<Demographic>>,
    land_use: RwLock<Vec<LandUseSurvey>>,
    horticultural: RwLock<Vec<HorticulturalDetail>>,
}

impl MockResponseRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn demographic_count(&self) -> usize {
        self.demographics.read().len()
    }

    pub fn land_use_count(&self) -> usize {
        self.land_use.read().len()
    }

    pub fn horticultural_count(&self) -> usize {
        self.horticultural.read().len()
    }

    pub fn last_land_use(&self) -> Option<LandUseSurvey> {
        self.land_use.read().last().cloned()
    }

    pub fn last_demographic(&self) -> Option<Demographic> {
        self.demographics.read().last().cloned()
    }
}

#[async_trait]
impl ResponseRepository for MockResponseRepo {
    async fn insert_demographic(&self, demographic: &Demographic) -> anyhow::Result<Demographic> {
        self.demographics.write().push(demographic.clone());
        Ok(demographic.clone())
    }

    async fn insert_land_use(&self, survey: &LandUseSurvey) -> anyhow::Result<LandUseSurvey> {
        self.land_use.write().push(survey.clone());
        Ok(survey.clone())
    }

    async fn insert_horticultural_detail(
        &self,
        detail: &HorticulturalDetail,
    ) -> anyhow::Result<HorticulturalDetail> {
        self.horticultural.write().push(detail.clone());
        Ok(detail.clone())
    }
}

// ===== Recording Mail Sender =====

#[derive(Default)]
pub struct RecordingMailSender {
    sent: RwLock<Vec<SentMail>>,
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl RecordingMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().len()
    }

    pub fn last(&self) -> Option<SentMail> {
        self.sent.read().last().cloned()
    }

    /// The one-time code from the most recent message body
    pub fn last_code(&self) -> Option<String> {
        let mail = self.last()?;
        let line = mail.body.lines().next()?;
        Some(line.rsplit(": ").next()?.to_string())
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        self.sent.write().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

// ===== Fixtures =====

pub struct TestHarness {
    pub service: Arc<Service>,
    pub users: Arc<MockUserRepo>,
    pub responses: Arc<MockResponseRepo>,
    pub mailer: Arc<RecordingMailSender>,
}

impl TestHarness {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepo::new());
        let responses = Arc::new(MockResponseRepo::new());
        let mailer = Arc::new(RecordingMailSender::new());
        let service = Arc::new(Service::new(
            users.clone(),
            responses.clone(),
            mailer.clone(),
            Config::default(),
        ));
        Self {
            service,
            users,
            responses,
            mailer,
        }
    }

    /// Register a default respondent and open a session
    pub async fn register_and_login(&self) -> (String, User) {
        self.service
            .register(registration("John", "Smith", "john@example.com"), "agree")
            .await
            .expect("registration should succeed");
        let (token, user) = self
            .service
            .login("john@example.com", "hunter22")
            .await
            .expect("login should succeed");
        (token, user)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn registration(first_name: &str, surname: &str, email: &str) -> Registration {
    Registration {
        first_name: first_name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        phone_number: "0211234567".to_string(),
        address: "1 Farm Road, Stellenbosch".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
    }
}
