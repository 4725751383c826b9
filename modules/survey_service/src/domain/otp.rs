//! One-time code generation and verification
//!
//! The code is keyed to the caller's session, not the identity: a later
//! issue within the same session replaces any pending code.

use super::session::{PendingOtp, SessionContext};
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};

/// Outcome of a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpOutcome {
    /// Code matched within the validity window; the pending code is cleared
    Verified,
    /// The validity window has passed; a new code must be issued
    Expired,
    /// No pending code, or the submitted code did not match. The pending
    /// code (if any) stays intact so the submitter may retry.
    Mismatch,
}

/// Generates fixed-length numeric codes and checks them single-use
pub struct OtpVerifier {
    length: usize,
    validity: Duration,
}

impl OtpVerifier {
    pub fn new(length: usize, validity: Duration) -> Self {
        Self { length, validity }
    }

    /// Generate a fresh code and store it with its expiry in the session,
    /// replacing any pending code. Returns the code for dispatch.
    pub fn issue(&self, session: &mut SessionContext) -> String {
        let code = self.generate_code();
        session.pending_otp = Some(PendingOtp {
            code: code.clone(),
            expires_at: Utc::now() + self.validity,
        });
        code
    }

    /// Check a submitted code against the session's pending code
    pub fn verify(&self, session: &mut SessionContext, submitted: &str) -> OtpOutcome {
        self.verify_at(session, submitted, Utc::now())
    }

    /// Verification with an explicit clock, used by the expiry tests
    pub fn verify_at(
        &self,
        session: &mut SessionContext,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> OtpOutcome {
        let Some(pending) = &session.pending_otp else {
            return OtpOutcome::Mismatch;
        };

        if now > pending.expires_at {
            return OtpOutcome::Expired;
        }

        if pending.code != submitted {
            return OtpOutcome::Mismatch;
        }

        // Single-use: a repeat of the same code must not verify again
        session.pending_otp = None;
        OtpOutcome::Verified
    }

    fn generate_code(&self) -> String {
        // StdRng seeded from the OS is a CSPRNG
        let mut rng = rand::rngs::StdRng::from_os_rng();
        (0..self.length)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> OtpVerifier {
        OtpVerifier::new(6, Duration::minutes(10))
    }

    #[test]
    fn issued_code_has_configured_length_and_is_numeric() {
        let mut session = SessionContext::default();
        let code = verifier().issue(&mut session);
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(
            session.pending_otp.as_ref().map(|p| p.code.as_str()),
            Some(code.as_str())
        );
    }

    #[test]
    fn reissue_replaces_pending_code() {
        let mut session = SessionContext::default();
        let v = verifier();
        let _first = v.issue(&mut session);
        let second = v.issue(&mut session);
        // The stored code must always be the latest one
        assert_eq!(session.pending_otp.map(|p| p.code), Some(second));
    }

    #[test]
    fn verify_without_pending_code_is_mismatch() {
        let mut session = SessionContext::default();
        assert_eq!(verifier().verify(&mut session, "123456"), OtpOutcome::Mismatch);
    }
}
