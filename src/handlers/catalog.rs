use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{service_options, ServiceKind, ServiceOptions};
use crate::services::catalog;
use crate::services::dialogue::responses::ESTIMATE_URL;

fn parse_service(kind: &str) -> Result<ServiceKind, AppError> {
    ServiceKind::parse(kind).ok_or_else(|| AppError::NotFound(format!("service {kind}")))
}

// GET /api/services/:kind
pub async fn get_options(Path(kind): Path<String>) -> Result<Json<ServiceOptions>, AppError> {
    let service = parse_service(&kind)?;
    service_options(service)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("service {kind}")))
}

// POST /api/services/:kind/estimate-link
#[derive(Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub selected: Vec<String>,
}

#[derive(Serialize)]
pub struct EstimateLink {
    pub url: String,
}

pub async fn estimate_link(
    Path(kind): Path<String>,
    Json(payload): Json<SelectionRequest>,
) -> Result<Json<EstimateLink>, AppError> {
    let service = parse_service(&kind)?;
    let query = catalog::estimate_query(service, &payload.selected)
        .map_err(|msg| AppError::BadRequest(msg.to_string()))?;
    Ok(Json(EstimateLink {
        url: format!("{ESTIMATE_URL}?{query}"),
    }))
}
