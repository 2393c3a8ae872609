//! HTTP route handlers for the stair design API.

use axum::{
    extract::Query,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::AppState;

use super::defaults::{defaults_for, LandingDefaults};
use super::designer::{StairDesign, StairDesigner};
use super::models::SynthesisResult;
use super::requests::{
    AdjustRequest, DefaultsQuery, DesignRequest, EditFieldRequest, SelectTopologyRequest,
};

/// Create the stair router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/defaults", get(defaults))
        .route("/synthesize", post(synthesize))
        .route("/topology", post(select_topology))
        .route("/edit", post(edit_field))
        .route("/steps", post(adjust_steps))
        .route("/middle-flight", post(adjust_middle_flight))
}

/// Health check for the stair engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "stair-engine",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Default landing widths for a topology and stair width.
async fn defaults(Query(query): Query<DefaultsQuery>) -> Json<LandingDefaults> {
    Json(defaults_for(query.topology, query.stair_width))
}

/// Synthesize the layout for a configuration as given.
async fn synthesize(Json(request): Json<DesignRequest>) -> Json<SynthesisResult> {
    let designer = StairDesigner::from_parts(request.topology, request.config);
    Json(designer.result().clone())
}

/// Switch topology, clearing manual overrides and resetting landing widths.
async fn select_topology(Json(request): Json<SelectTopologyRequest>) -> Json<StairDesign> {
    let mut designer = resume(request.design);
    designer.select_topology(request.new_topology);
    Json(designer.snapshot())
}

/// Apply a raw numeric edit from the wizard form.
async fn edit_field(Json(request): Json<EditFieldRequest>) -> Json<StairDesign> {
    let mut designer = resume(request.design);
    designer.edit_field(request.field, &request.value);
    Json(designer.snapshot())
}

/// Step the total count up or down. A rejected adjustment returns the design unchanged.
async fn adjust_steps(Json(request): Json<AdjustRequest>) -> Json<StairDesign> {
    let mut designer = resume(request.design);
    designer.adjust_steps(request.delta);
    Json(designer.snapshot())
}

/// Step the middle flight of a double landing stair up or down.
async fn adjust_middle_flight(Json(request): Json<AdjustRequest>) -> Json<StairDesign> {
    let mut designer = resume(request.design);
    designer.adjust_middle_flight(request.delta);
    Json(designer.snapshot())
}

fn resume(design: DesignRequest) -> StairDesigner {
    StairDesigner::from_parts(design.topology, design.config)
}
