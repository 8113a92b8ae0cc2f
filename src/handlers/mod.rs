pub mod catalog;
pub mod chat;
pub mod forms;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/chat", post(chat::send_message))
        .route("/api/chat/:id/transcript", get(chat::get_transcript))
        .route("/api/chat/:id/reset", post(chat::reset_session))
        .route("/api/forms/:kind", post(forms::submit_form))
        .route("/api/services/:kind", get(catalog::get_options))
        .route(
            "/api/services/:kind/estimate-link",
            post(catalog::estimate_link),
        )
        .with_state(state)
}
