use crate::api::handlers::{ask, health};
use crate::types::{AskRequest, AskResponse, ErrorResponse, HealthResponse};
use crate::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Cocktail QA", description = "Questions about cocktail recipes, answered from the dataset"),
    paths(ask::ask, health::health),
    components(schemas(AskRequest, AskResponse, HealthResponse, ErrorResponse)),
    tags(
        (name = "qa", description = "Retrieval-augmented question answering"),
        (name = "health", description = "Readiness")
    )
)]
pub struct ApiDoc;

/// All routes, still missing their [`AppState`].
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/ask", post(ask::ask))
        .route("/health", get(health::health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/ask"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
