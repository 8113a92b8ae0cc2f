use std::sync::{Arc, Mutex};

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tier1_assistant::config::AppConfig;
use tier1_assistant::handlers;
use tier1_assistant::services::forms::formspree::FormspreeSubmitter;
use tier1_assistant::services::sessions::SessionStore;
use tier1_assistant::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.contact_form_url.is_empty() || config.estimate_form_url.is_empty() {
        tracing::warn!("form endpoints not fully configured, submissions will be refused");
    }

    let submitter = FormspreeSubmitter::new(
        config.contact_form_url.clone(),
        config.estimate_form_url.clone(),
    );

    let state = Arc::new(AppState {
        sessions: Mutex::new(SessionStore::new(chrono::Duration::minutes(
            config.session_ttl_minutes,
        ))),
        config: config.clone(),
        submitter: Box::new(submitter),
    });

    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
