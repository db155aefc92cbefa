//! HTTP API handlers and routes
//!
//! # API Endpoints
//!
//! - `POST /ask` - `{"text": "..."}` in, `{"response": "..."}` out
//! - `GET /health` - document count and model names
//! - `GET /api-docs/openapi.json` - OpenAPI document for the above
//!
//! Every error reply has the body `{"error": "..."}`: 400 for a malformed
//! request, 500 when embedding, retrieval or the model fails.

/// Request handlers.
pub mod handlers;
/// Router configuration and the OpenAPI document.
pub mod routes;
