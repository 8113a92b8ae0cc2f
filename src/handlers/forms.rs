use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{ContactForm, FormKind};
use crate::services::forms::{validation, SUCCESS_MESSAGE};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub submit_label: &'static str,
}

// POST /api/forms/:kind
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Json(form): Json<ContactForm>,
) -> Result<Json<SubmitResponse>, AppError> {
    let kind = FormKind::parse(&kind).ok_or_else(|| AppError::NotFound(format!("form {kind}")))?;

    let form = validation::validate(&form).map_err(|errors| {
        tracing::debug!(form = kind.as_str(), errors = errors.len(), "form rejected");
        AppError::Validation(errors)
    })?;

    state.submitter.submit(kind, &form).await?;
    tracing::info!(form = kind.as_str(), "form submitted");

    Ok(Json(SubmitResponse {
        success: true,
        message: SUCCESS_MESSAGE,
        submit_label: kind.submit_label(),
    }))
}
