//! Axum HTTP API server.
//!
//! This crate provides:
//! - `POST /api/analyze`: forward a still frame to the vision model and
//!   record the result in the history store
//! - `GET /api/snapshots`: shot history, newest first
//! - Request ids, request logging, CORS, and body-size limiting

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
