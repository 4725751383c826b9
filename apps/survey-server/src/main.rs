//! AgriSurvey server entry point

mod config;

use anyhow::Context;
use clap::Parser;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use survey_service::api::rest::routes;
use survey_service::domain::{LogMailSender, Service};
use survey_service::infra::storage::migrations::Migrator;
use survey_service::infra::storage::repositories::{
    SeaOrmResponseRepository, SeaOrmUserRepository,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "survey-server", about = "AgriSurvey HTTP server")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = config::AppConfig::load(&args.config)?;

    let db = Arc::new(
        Database::connect(&cfg.database.url)
            .await
            .with_context(|| format!("connecting to {}", cfg.database.url))?,
    );
    Migrator::up(&*db, None).await.context("running migrations")?;
    tracing::info!("database ready");

    let user_repo = Arc::new(SeaOrmUserRepository::new(db.clone()));
    let response_repo = Arc::new(SeaOrmResponseRepository::new(db));
    let mailer = Arc::new(LogMailSender);
    let service = Arc::new(Service::new(user_repo, response_repo, mailer, cfg.survey));

    let app = routes::router(service).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("binding {}", cfg.bind_addr))?;
    tracing::info!(addr = %cfg.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
    }
}
