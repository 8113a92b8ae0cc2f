use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ConversationState, QuickReply, TranscriptEntry};
use crate::services::dialogue::responses;
use crate::state::AppState;

// POST /api/chat
#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
    pub reply_html: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
    pub state: ConversationState,
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("message is empty".to_string()));
    }

    let response = {
        let mut sessions = state.sessions.lock().unwrap();
        let ttl = sessions.ttl();
        let session = sessions.get_or_create(payload.session_id.as_deref());
        let reply = session
            .handle_user_message(message, ttl)
            .ok_or_else(|| AppError::BadRequest("message is empty".to_string()))?;

        tracing::info!(
            session = %session.id,
            state = session.dialogue.state().as_str(),
            "chat reply"
        );

        ChatResponse {
            session_id: session.id.clone(),
            reply_html: reply.to_markup(),
            reply: reply.text,
            quick_replies: reply.quick_replies,
            state: session.dialogue.state(),
        }
    };

    // Typing pause. The reply is already recorded, so a second message sent
    // meanwhile is answered in arrival order; a dropped request cancels it.
    if state.config.reply_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.reply_delay_ms)).await;
    }

    Ok(Json(response))
}

// GET /api/chat/:id/transcript
pub async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TranscriptEntry>>, AppError> {
    let sessions = state.sessions.lock().unwrap();
    sessions
        .get(&id)
        .map(|s| Json(s.transcript.clone()))
        .ok_or_else(|| AppError::NotFound(format!("chat session {id}")))
}

// POST /api/chat/:id/reset
#[derive(Serialize)]
pub struct ResetResponse {
    pub session_id: String,
    pub reply_html: String,
    pub state: ConversationState,
}

pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ResetResponse>, AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("chat session {id}")))?;
    session.reset();
    tracing::info!(session = %id, "chat session reset");

    Ok(Json(ResetResponse {
        session_id: id,
        reply_html: responses::welcome().to_markup(),
        state: session.dialogue.state(),
    }))
}
