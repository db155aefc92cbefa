//! API request handlers.

/// `POST /ask` question answering.
pub mod ask;
/// `GET /health` readiness report.
pub mod health;
