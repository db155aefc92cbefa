use crate::{
    types::{AppError, AskRequest, AskResponse, ErrorResponse, Result},
    AppState,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{error, info};

/// Answer a question about the cocktail dataset
#[utoipa::path(
    post,
    path = "/ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Model answer", body = AskResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Embedding, retrieval or model failure", body = ErrorResponse)
    ),
    tag = "qa"
)]
pub async fn ask(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    info!(query = %request.text, "Received query");

    let response = state.engine.query(&request.text).await.inspect_err(|e| {
        error!(error = %e, "Query failed");
    })?;

    info!(answer = %response, "Sending answer");
    Ok(Json(AskResponse { response }))
}
