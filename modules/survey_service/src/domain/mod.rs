//! Domain layer - business logic and services

pub mod mailer;
pub mod navigator;
pub mod otp;
pub mod repository;
pub mod service;
pub mod session;
pub mod validation;

pub use mailer::{LogMailSender, MailSender};
pub use otp::{OtpOutcome, OtpVerifier};
pub use repository::{InsertError, ResponseRepository, UserRepository};
pub use service::Service;
pub use session::{PendingOtp, SessionContext, SessionStore};
