//! Server configuration
//!
//! Loaded from an optional YAML file with `SURVEY_`-prefixed environment
//! overrides (double underscore as the section separator, e.g.
//! `SURVEY_DATABASE__URL`).

use anyhow::Context;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Survey module configuration
    #[serde(default)]
    pub survey: survey_service::Config,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SeaORM connection URL (SQLite or Postgres)
    #[serde(default = "default_db_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("SURVEY_").split("__"))
            .extract()
            .with_context(|| format!("loading configuration from {}", path.display()))
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_db_url() -> String {
    "sqlite://survey.db?mode=rwc".to_string()
}
