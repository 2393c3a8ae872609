//! HTTP route handlers for the report's stair list.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::stair::designer::StairDesigner;
use crate::stair::models::{StairConfiguration, StairTopology};
use crate::AppState;

use super::store::{ReportTotals, SavedStairDesign};

/// Design committed from the stair designer.
#[derive(Debug, Deserialize)]
pub struct SaveStairRequest {
    pub topology: StairTopology,
    #[serde(default)]
    pub config: StairConfiguration,
}

/// Create the report router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stairs", get(list).post(save))
        .route("/stairs/:id", delete(remove))
        .route("/totals", get(totals))
}

async fn list(State(state): State<AppState>) -> Json<Vec<SavedStairDesign>> {
    Json(state.report.list().await)
}

/// Save a design. The result is recomputed here so the snapshot always
/// matches its configuration.
async fn save(
    State(state): State<AppState>,
    Json(request): Json<SaveStairRequest>,
) -> (StatusCode, Json<SavedStairDesign>) {
    let design = StairDesigner::from_parts(request.topology, request.config).snapshot();
    let saved = state.report.save(design).await;
    (StatusCode::CREATED, Json(saved))
}

async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if state.report.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("stair design {id}")))
    }
}

async fn totals(State(state): State<AppState>) -> Json<ReportTotals> {
    Json(state.report.totals().await)
}
