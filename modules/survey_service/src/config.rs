//! Configuration for the survey service module

use serde::Deserialize;

/// Survey service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Province whose respondents form the target population.
    /// Matched by exact string equality against the screening answer.
    #[serde(default = "default_target_province")]
    pub target_province: String,

    /// Number of digits in an issued one-time code
    #[serde(default = "default_otp_length")]
    pub otp_length: usize,

    /// Validity window for an issued one-time code, in minutes
    #[serde(default = "default_otp_validity_minutes")]
    pub otp_validity_minutes: i64,

    /// Idle lifetime of a session before it is evicted, in minutes
    #[serde(default = "default_session_ttl_minutes")]
    pub session_ttl_minutes: i64,

    /// Upper bound on username suffix probing during registration
    #[serde(default = "default_username_probe_limit")]
    pub username_probe_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_province: default_target_province(),
            otp_length: default_otp_length(),
            otp_validity_minutes: default_otp_validity_minutes(),
            session_ttl_minutes: default_session_ttl_minutes(),
            username_probe_limit: default_username_probe_limit(),
        }
    }
}

fn default_target_province() -> String {
    "Western Cape".to_string()
}

fn default_otp_length() -> usize {
    6
}

fn default_otp_validity_minutes() -> i64 {
    10
}

fn default_session_ttl_minutes() -> i64 {
    1440
}

fn default_username_probe_limit() -> u32 {
    100
}
