use crate::{types::HealthResponse, AppState};
use axum::{extract::State, Json};

/// Report that the index is loaded and which models serve it
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        documents: state.engine.index().len(),
        model: state.engine.llm().model_name().to_string(),
        embedding_model: state.engine.embedder().model_name().to_string(),
    })
}
