use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Body of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskRequest {
    /// Natural-language question about the cocktail dataset
    pub text: String,
}

/// Successful reply of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    /// The model's answer, returned unmodified
    pub response: String,
}

/// Reply of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` once the server is listening
    pub status: String,
    /// Number of indexed recipe documents
    pub documents: usize,
    /// Language model answering queries
    pub model: String,
    /// Embedding model used for documents and queries
    pub embedding_model: String,
}

/// Error body returned for every non-2xx reply.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub error: String,
}

// ============= Error Types =============

/// Request-time failures, mapped to HTTP statuses by `IntoResponse`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The embedding model failed or returned malformed vectors
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Index construction or lookup failed
    #[error("Index error: {0}")]
    Index(String),

    /// The language model could not produce a completion
    #[error("LLM error: {0}")]
    LLM(String),

    /// Malformed request; the only client error
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anything else, e.g. a panicked blocking task
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<cocktail_vector::Error> for AppError {
    fn from(err: cocktail_vector::Error) -> Self {
        AppError::Index(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::InvalidInput(_) => axum::http::StatusCode::BAD_REQUEST,
            AppError::Embedding(_)
            | AppError::Index(_)
            | AppError::LLM(_)
            | AppError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
